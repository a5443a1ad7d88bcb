//! Effect Applicator
//!
//! Derives document-level presentation directives from the settings and
//! applies them to the document root. Recomputes the full directive set on
//! every call, so applying the same settings twice leaves the root in the
//! same state rather than accumulating.

use sahay_dom::Document;

use crate::settings::{AccessibilitySettings, ColorTheme, Saturation, TextScale};

/// Class toggled by `dyslexia_font`
pub const CLASS_DYSLEXIA_FONT: &str = "dyslexia-font";
/// Class marking focus-mask rendering; the tracker owns the pointer
/// subscription behind it
pub const CLASS_FOCUS_MASK: &str = "focus-mask";
pub const CLASS_LETTER_SPACING: &str = "letter-spacing-wide";
pub const CLASS_LINE_HEIGHT: &str = "line-height-wide";
pub const CLASS_HIGHLIGHT_LINKS: &str = "highlight-links";
pub const CLASS_BIG_CURSOR: &str = "big-cursor";
pub const CLASS_PAUSE_ANIMATIONS: &str = "pause-animations";
pub const CLASS_HIDE_IMAGES: &str = "hide-images";
pub const CLASS_DARK_MODE: &str = "dark-mode";

/// Theme attribute on the document root
pub const ATTR_THEME: &str = "data-theme";
/// Inline style property carrying the combined color filter
pub const STYLE_FILTER: &str = "filter";

/// Applies settings-derived directives to a document root
#[derive(Debug, Default)]
pub struct EffectApplicator;

impl EffectApplicator {
    pub fn new() -> Self {
        Self
    }

    /// Apply the full directive set for `settings` to `doc`'s root
    pub fn apply(&self, settings: &AccessibilitySettings, doc: &mut Document) {
        // Text scale classes are mutually exclusive.
        for scale in TextScale::ALL {
            doc.set_root_class(scale.class_name(), scale == settings.text_scale);
        }

        doc.set_root_class(CLASS_DYSLEXIA_FONT, settings.dyslexia_font);
        doc.set_root_class(CLASS_FOCUS_MASK, settings.focus_mode);
        doc.set_root_class(CLASS_LETTER_SPACING, settings.letter_spacing_wide);
        doc.set_root_class(CLASS_LINE_HEIGHT, settings.line_height_wide);
        doc.set_root_class(CLASS_HIGHLIGHT_LINKS, settings.highlight_links);
        doc.set_root_class(CLASS_BIG_CURSOR, settings.big_cursor);
        doc.set_root_class(CLASS_PAUSE_ANIMATIONS, settings.pause_animations);
        doc.set_root_class(CLASS_HIDE_IMAGES, settings.hide_images);

        doc.set_root_attribute(ATTR_THEME, settings.color_theme.attribute_value());
        doc.set_root_class(CLASS_DARK_MODE, settings.color_theme == ColorTheme::Dark);

        match filter_expression(settings.saturation, settings.invert_colors) {
            Some(filter) => doc.set_root_style(STYLE_FILTER, &filter),
            None => doc.remove_root_style(STYLE_FILTER),
        }
    }
}

/// Combined color filter for a saturation level and inversion flag
///
/// When inversion is on the expression is always `saturate(…) invert(1)`,
/// in that order; the saturation term is kept even at the normal level.
pub fn filter_expression(saturation: Saturation, invert: bool) -> Option<String> {
    let saturate = match saturation {
        Saturation::Grayscale => "saturate(0%)",
        Saturation::Normal => "saturate(100%)",
        Saturation::High => "saturate(200%)",
    };

    if invert {
        Some(format!("{saturate} invert(1)"))
    } else if saturation == Saturation::Normal {
        None
    } else {
        Some(saturate.to_string())
    }
}
