//! Sahay Assistive Engine
//!
//! Client-resident accessibility engine for the Sahay dashboard.
//!
//! Features:
//! - Orthogonal presentation-accessibility settings with named setters
//! - Derived document directives (classes, theme attribute, color filter)
//! - Pointer-following reading-focus mask
//! - Speech narration with play/pause/resume/stop and navigation cancel

pub mod effects;
pub mod engine;
pub mod focus_mask;
pub mod narration;
pub mod settings;

pub use effects::{filter_expression, EffectApplicator};
pub use engine::AssistiveEngine;
pub use focus_mask::{FocusMaskGeometry, FocusMaskTracker, PointerEvents, FOCUS_BAND_HEIGHT};
pub use narration::{
    extract_readable_text, NarrationController, NarrationState, SessionToken, SpeechSynth,
    FALLBACK_UTTERANCE,
};
pub use settings::{AccessibilitySettings, ColorTheme, Saturation, SettingsStore, TextScale};
