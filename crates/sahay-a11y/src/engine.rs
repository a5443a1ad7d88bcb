//! Assistive Engine
//!
//! The explicitly constructed context owning the settings store, effect
//! applicator, focus mask tracker, and narration controller. Built once at
//! application start; host events (pointer moves, navigation, utterance
//! completion) are dispatched through it.

use sahay_dom::Document;

use crate::effects::EffectApplicator;
use crate::focus_mask::{FocusMaskGeometry, FocusMaskTracker, PointerEvents};
use crate::narration::{NarrationController, NarrationState, SessionToken, SpeechSynth};
use crate::settings::{ColorTheme, Saturation, SettingsStore, TextScale};

/// Engine context for one dashboard session
pub struct AssistiveEngine {
    store: SettingsStore,
    effects: EffectApplicator,
    pointer: PointerEvents,
    tracker: FocusMaskTracker,
    narration: NarrationController,
    document: Document,
    settings_panel_open: bool,
}

impl AssistiveEngine {
    /// Construct the engine over the active document and the host's
    /// speech capability; defaults are applied to the document immediately.
    pub fn new(document: Document, synth: Box<dyn SpeechSynth>) -> Self {
        let mut engine = Self {
            store: SettingsStore::new(),
            effects: EffectApplicator::new(),
            pointer: PointerEvents::new(),
            tracker: FocusMaskTracker::new(),
            narration: NarrationController::new(synth),
            document,
            settings_panel_open: false,
        };
        engine.apply_effects();
        engine
    }

    fn apply_effects(&mut self) {
        self.effects.apply(self.store.settings(), &mut self.document);
    }

    /// Keep the tracker's subscription in step with the focus-mode
    /// setting; runs synchronously with every change that can affect it.
    fn sync_tracker(&mut self) {
        self.tracker.set_active(self.store.focus_mode(), &mut self.pointer);
    }

    /// The active document
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    // Settings surface. Each setter re-derives the document directives.

    pub fn text_scale(&self) -> TextScale {
        self.store.text_scale()
    }

    pub fn set_text_scale(&mut self, scale: TextScale) {
        self.store.set_text_scale(scale);
        self.apply_effects();
    }

    pub fn letter_spacing_wide(&self) -> bool {
        self.store.letter_spacing_wide()
    }

    pub fn set_letter_spacing_wide(&mut self, on: bool) {
        self.store.set_letter_spacing_wide(on);
        self.apply_effects();
    }

    pub fn line_height_wide(&self) -> bool {
        self.store.line_height_wide()
    }

    pub fn set_line_height_wide(&mut self, on: bool) {
        self.store.set_line_height_wide(on);
        self.apply_effects();
    }

    pub fn dyslexia_font(&self) -> bool {
        self.store.dyslexia_font()
    }

    pub fn set_dyslexia_font(&mut self, on: bool) {
        self.store.set_dyslexia_font(on);
        self.apply_effects();
    }

    pub fn focus_mode(&self) -> bool {
        self.store.focus_mode()
    }

    pub fn set_focus_mode(&mut self, on: bool) {
        self.store.set_focus_mode(on);
        self.sync_tracker();
        self.apply_effects();
    }

    pub fn saturation(&self) -> Saturation {
        self.store.saturation()
    }

    pub fn cycle_saturation(&mut self) -> Saturation {
        let level = self.store.cycle_saturation();
        self.apply_effects();
        level
    }

    pub fn invert_colors(&self) -> bool {
        self.store.invert_colors()
    }

    pub fn set_invert_colors(&mut self, on: bool) {
        self.store.set_invert_colors(on);
        self.apply_effects();
    }

    pub fn color_theme(&self) -> ColorTheme {
        self.store.color_theme()
    }

    pub fn set_color_theme(&mut self, theme: ColorTheme) {
        self.store.set_color_theme(theme);
        self.apply_effects();
    }

    pub fn highlight_links(&self) -> bool {
        self.store.highlight_links()
    }

    pub fn set_highlight_links(&mut self, on: bool) {
        self.store.set_highlight_links(on);
        self.apply_effects();
    }

    pub fn big_cursor(&self) -> bool {
        self.store.big_cursor()
    }

    pub fn set_big_cursor(&mut self, on: bool) {
        self.store.set_big_cursor(on);
        self.apply_effects();
    }

    pub fn pause_animations(&self) -> bool {
        self.store.pause_animations()
    }

    pub fn set_pause_animations(&mut self, on: bool) {
        self.store.set_pause_animations(on);
        self.apply_effects();
    }

    pub fn hide_images(&self) -> bool {
        self.store.hide_images()
    }

    pub fn set_hide_images(&mut self, on: bool) {
        self.store.set_hide_images(on);
        self.apply_effects();
    }

    pub fn narration_enabled(&self) -> bool {
        self.store.narration_enabled()
    }

    /// Disabling narration cancels any in-flight utterance
    pub fn set_narration_enabled(&mut self, on: bool) {
        self.store.set_narration_enabled(on);
        if !on {
            self.narration.stop();
        }
        self.apply_effects();
    }

    /// Restore every setting to its default and silence narration
    ///
    /// Narration is stopped unconditionally, even when it was already
    /// disabled.
    pub fn reset(&mut self) {
        self.store.reset();
        self.narration.stop();
        self.sync_tracker();
        self.apply_effects();
        log::info!("accessibility settings reset to defaults");
    }

    // Narration surface.

    pub fn narration_state(&self) -> NarrationState {
        self.narration.state()
    }

    pub fn is_reading(&self) -> bool {
        self.narration.is_reading()
    }

    pub fn is_paused(&self) -> bool {
        self.narration.is_paused()
    }

    /// Narrate the active document's visible text
    pub fn read_page(&mut self) -> Option<SessionToken> {
        self.narration
            .read_page(&self.document, self.store.narration_enabled())
    }

    pub fn pause_narration(&mut self) {
        self.narration.pause();
    }

    pub fn resume_narration(&mut self) {
        self.narration.resume();
    }

    pub fn stop_narration(&mut self) {
        self.narration.stop();
    }

    // Host event inputs.

    /// Pointer sample from the host; yields mask geometry while focus
    /// mode is on, None otherwise
    pub fn on_pointer_move(&mut self, _x: f32, y: f32) -> Option<FocusMaskGeometry> {
        self.tracker.sample(y)
    }

    /// Utterance completion from the host speech engine
    pub fn on_utterance_end(&mut self, token: SessionToken) {
        self.narration.on_utterance_end(token);
    }

    /// Route change: narration stops, directives carry over to the new
    /// document
    pub fn navigate(&mut self, document: Document) {
        self.narration.stop();
        log::info!("navigated to {}", document.url());
        self.document = document;
        self.apply_effects();
    }

    // Settings panel modal visibility, independent of the settings record.

    pub fn settings_panel_open(&self) -> bool {
        self.settings_panel_open
    }

    pub fn set_settings_panel_open(&mut self, open: bool) {
        self.settings_panel_open = open;
    }

    /// Live pointer subscriptions, exposed for the host and for tests
    pub fn pointer_subscriber_count(&self) -> usize {
        self.pointer.subscriber_count()
    }
}
