//! Console Speech Stub
//!
//! Stands in for the host platform's speech synthesis when running the
//! dashboard shell headless; utterances go to the log.

use sahay_a11y::SpeechSynth;

/// Log-backed speech synthesis
#[derive(Debug, Default)]
pub struct ConsoleSynth {
    speaking: bool,
    paused: bool,
}

impl ConsoleSynth {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SpeechSynth for ConsoleSynth {
    fn speak(&mut self, text: &str) {
        self.speaking = true;
        self.paused = false;
        log::info!("[narration] {}", text);
    }

    fn cancel(&mut self) {
        if self.speaking {
            log::debug!("[narration] canceled");
        }
        self.speaking = false;
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
        log::debug!("[narration] paused");
    }

    fn resume(&mut self) {
        self.paused = false;
        log::debug!("[narration] resumed");
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_flags() {
        let mut synth = ConsoleSynth::new();
        assert!(!synth.is_speaking());

        synth.speak("hello");
        assert!(synth.is_speaking());
        assert!(!synth.is_paused());

        synth.pause();
        assert!(synth.is_paused());

        synth.cancel();
        assert!(!synth.is_speaking());
        assert!(!synth.is_paused());
    }
}
