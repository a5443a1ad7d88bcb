//! Accessibility Settings
//!
//! The settings store: single source of truth for every presentation
//! accessibility option. Pure state, no presentation side effects.

/// Text scale step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextScale {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl TextScale {
    /// CSS class selecting this scale
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Small => "text-small",
            Self::Medium => "text-medium",
            Self::Large => "text-large",
            Self::XLarge => "text-xlarge",
        }
    }

    pub const ALL: [TextScale; 4] = [Self::Small, Self::Medium, Self::Large, Self::XLarge];
}

/// Color saturation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Saturation {
    /// Fully desaturated
    Grayscale = 0,
    #[default]
    Normal = 1,
    High = 2,
}

impl Saturation {
    /// The next level in the fixed cycle normal → high → grayscale → normal
    pub fn cycled(&self) -> Self {
        match self {
            Self::Normal => Self::High,
            Self::High => Self::Grayscale,
            Self::Grayscale => Self::Normal,
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Light,
    Dark,
}

impl ColorTheme {
    pub fn attribute_value(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// The full set of accessibility options
///
/// Every field is independently settable; no field's domain depends on
/// another's value. Defaults: medium text, all toggles off, normal
/// saturation, light theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibilitySettings {
    pub text_scale: TextScale,
    pub letter_spacing_wide: bool,
    pub line_height_wide: bool,
    pub dyslexia_font: bool,
    pub focus_mode: bool,
    pub saturation: Saturation,
    pub invert_colors: bool,
    pub color_theme: ColorTheme,
    pub highlight_links: bool,
    pub big_cursor: bool,
    pub pause_animations: bool,
    pub hide_images: bool,
    pub narration_enabled: bool,
}

/// Settings store
///
/// Mutation goes through the named setters only; `reset` restores all
/// fields to their defaults atomically.
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: AccessibilitySettings,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current settings snapshot
    pub fn settings(&self) -> &AccessibilitySettings {
        &self.settings
    }

    pub fn text_scale(&self) -> TextScale {
        self.settings.text_scale
    }

    pub fn set_text_scale(&mut self, scale: TextScale) {
        self.settings.text_scale = scale;
    }

    pub fn letter_spacing_wide(&self) -> bool {
        self.settings.letter_spacing_wide
    }

    pub fn set_letter_spacing_wide(&mut self, on: bool) {
        self.settings.letter_spacing_wide = on;
    }

    pub fn line_height_wide(&self) -> bool {
        self.settings.line_height_wide
    }

    pub fn set_line_height_wide(&mut self, on: bool) {
        self.settings.line_height_wide = on;
    }

    pub fn dyslexia_font(&self) -> bool {
        self.settings.dyslexia_font
    }

    pub fn set_dyslexia_font(&mut self, on: bool) {
        self.settings.dyslexia_font = on;
    }

    pub fn focus_mode(&self) -> bool {
        self.settings.focus_mode
    }

    pub fn set_focus_mode(&mut self, on: bool) {
        self.settings.focus_mode = on;
    }

    pub fn saturation(&self) -> Saturation {
        self.settings.saturation
    }

    /// Advance saturation along the fixed 3-cycle; the only way the
    /// store changes this field.
    pub fn cycle_saturation(&mut self) -> Saturation {
        self.settings.saturation = self.settings.saturation.cycled();
        self.settings.saturation
    }

    pub fn invert_colors(&self) -> bool {
        self.settings.invert_colors
    }

    pub fn set_invert_colors(&mut self, on: bool) {
        self.settings.invert_colors = on;
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.settings.color_theme
    }

    pub fn set_color_theme(&mut self, theme: ColorTheme) {
        self.settings.color_theme = theme;
    }

    pub fn highlight_links(&self) -> bool {
        self.settings.highlight_links
    }

    pub fn set_highlight_links(&mut self, on: bool) {
        self.settings.highlight_links = on;
    }

    pub fn big_cursor(&self) -> bool {
        self.settings.big_cursor
    }

    pub fn set_big_cursor(&mut self, on: bool) {
        self.settings.big_cursor = on;
    }

    pub fn pause_animations(&self) -> bool {
        self.settings.pause_animations
    }

    pub fn set_pause_animations(&mut self, on: bool) {
        self.settings.pause_animations = on;
    }

    pub fn hide_images(&self) -> bool {
        self.settings.hide_images
    }

    pub fn set_hide_images(&mut self, on: bool) {
        self.settings.hide_images = on;
    }

    pub fn narration_enabled(&self) -> bool {
        self.settings.narration_enabled
    }

    pub fn set_narration_enabled(&mut self, on: bool) {
        self.settings.narration_enabled = on;
    }

    /// Restore every field to its default in one step
    pub fn reset(&mut self) {
        self.settings = AccessibilitySettings::default();
    }
}
