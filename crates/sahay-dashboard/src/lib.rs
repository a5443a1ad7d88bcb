//! Sahay Dashboard Shell
//!
//! Consumer of the assistive engine: the settings panel surface and the
//! host-side speech stub.

pub mod panel;
pub mod speech;

pub use panel::{PanelAction, SettingsPanel};
pub use speech::ConsoleSynth;
