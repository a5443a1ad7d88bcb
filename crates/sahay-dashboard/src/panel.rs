//! Settings Panel
//!
//! UI surface over the engine's public operations: reads the getters,
//! dispatches control actions to the mutators. Holds no settings state of
//! its own.

use sahay_a11y::{AssistiveEngine, ColorTheme, TextScale};

/// A control activated on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    SetTextScale(TextScale),
    ToggleLetterSpacing,
    ToggleLineHeight,
    ToggleDyslexiaFont,
    ToggleFocusMode,
    CycleSaturation,
    ToggleInvertColors,
    SetColorTheme(ColorTheme),
    ToggleHighlightLinks,
    ToggleBigCursor,
    TogglePauseAnimations,
    ToggleHideImages,
    ToggleNarration,
    ResetAll,
}

/// The accessibility settings panel
#[derive(Debug, Default)]
pub struct SettingsPanel;

impl SettingsPanel {
    pub fn new() -> Self {
        Self
    }

    /// Show or hide the panel
    pub fn toggle(&self, engine: &mut AssistiveEngine) {
        let open = !engine.settings_panel_open();
        engine.set_settings_panel_open(open);
    }

    /// Route a control activation to the engine
    pub fn dispatch(&self, engine: &mut AssistiveEngine, action: PanelAction) {
        match action {
            PanelAction::SetTextScale(scale) => engine.set_text_scale(scale),
            PanelAction::ToggleLetterSpacing => {
                engine.set_letter_spacing_wide(!engine.letter_spacing_wide())
            }
            PanelAction::ToggleLineHeight => {
                engine.set_line_height_wide(!engine.line_height_wide())
            }
            PanelAction::ToggleDyslexiaFont => engine.set_dyslexia_font(!engine.dyslexia_font()),
            PanelAction::ToggleFocusMode => engine.set_focus_mode(!engine.focus_mode()),
            PanelAction::CycleSaturation => {
                engine.cycle_saturation();
            }
            PanelAction::ToggleInvertColors => engine.set_invert_colors(!engine.invert_colors()),
            PanelAction::SetColorTheme(theme) => engine.set_color_theme(theme),
            PanelAction::ToggleHighlightLinks => {
                engine.set_highlight_links(!engine.highlight_links())
            }
            PanelAction::ToggleBigCursor => engine.set_big_cursor(!engine.big_cursor()),
            PanelAction::TogglePauseAnimations => {
                engine.set_pause_animations(!engine.pause_animations())
            }
            PanelAction::ToggleHideImages => engine.set_hide_images(!engine.hide_images()),
            PanelAction::ToggleNarration => {
                engine.set_narration_enabled(!engine.narration_enabled())
            }
            PanelAction::ResetAll => engine.reset(),
        }
    }

    /// One line per option, for the text UI
    pub fn render_summary(&self, engine: &AssistiveEngine) -> Vec<String> {
        let on_off = |v: bool| if v { "on" } else { "off" };
        vec![
            format!("text scale       {:?}", engine.text_scale()),
            format!("letter spacing   {}", on_off(engine.letter_spacing_wide())),
            format!("line height      {}", on_off(engine.line_height_wide())),
            format!("dyslexia font    {}", on_off(engine.dyslexia_font())),
            format!("focus mode       {}", on_off(engine.focus_mode())),
            format!("saturation       {:?}", engine.saturation()),
            format!("invert colors    {}", on_off(engine.invert_colors())),
            format!("theme            {:?}", engine.color_theme()),
            format!("highlight links  {}", on_off(engine.highlight_links())),
            format!("big cursor       {}", on_off(engine.big_cursor())),
            format!("pause animations {}", on_off(engine.pause_animations())),
            format!("hide images      {}", on_off(engine.hide_images())),
            format!("narration        {}", on_off(engine.narration_enabled())),
        ]
    }
}
