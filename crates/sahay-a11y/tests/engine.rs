//! Integration tests - Full engine contract
//!
//! Exercises the public surface the dashboard consumes: settings,
//! derived directives, focus mask, and the narration lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use sahay_a11y::{
    AssistiveEngine, ColorTheme, NarrationState, Saturation, SpeechSynth, TextScale,
    FALLBACK_UTTERANCE,
};
use sahay_dom::Document;

// ============================================================================
// FAKE SPEECH CAPABILITY
// ============================================================================

#[derive(Debug, Default)]
struct SynthLog {
    speaking: bool,
    paused: bool,
    spoken: Vec<String>,
    cancels: usize,
}

#[derive(Debug, Clone, Default)]
struct RecordingSynth(Rc<RefCell<SynthLog>>);

impl SpeechSynth for RecordingSynth {
    fn speak(&mut self, text: &str) {
        let mut log = self.0.borrow_mut();
        log.speaking = true;
        log.paused = false;
        log.spoken.push(text.to_string());
    }

    fn cancel(&mut self) {
        let mut log = self.0.borrow_mut();
        log.speaking = false;
        log.paused = false;
        log.cancels += 1;
    }

    fn pause(&mut self) {
        self.0.borrow_mut().paused = true;
    }

    fn resume(&mut self) {
        self.0.borrow_mut().paused = false;
    }

    fn is_speaking(&self) -> bool {
        self.0.borrow().speaking
    }

    fn is_paused(&self) -> bool {
        self.0.borrow().paused
    }
}

fn scheme_page() -> Document {
    let mut doc = Document::new("/schemes");
    let h1 = doc.create_element("h1");
    let p = doc.create_element("p");
    let btn = doc.create_element("button");
    doc.append_child(doc.root(), h1).unwrap();
    doc.append_child(doc.root(), p).unwrap();
    doc.append_child(doc.root(), btn).unwrap();
    doc.set_text(h1, "Eligible schemes").unwrap();
    doc.set_text(p, "Three schemes match your profile").unwrap();
    doc.set_text(btn, "Apply now").unwrap();
    doc
}

fn engine_with_log(doc: Document) -> (AssistiveEngine, Rc<RefCell<SynthLog>>) {
    let synth = RecordingSynth::default();
    let log = Rc::clone(&synth.0);
    (AssistiveEngine::new(doc, Box::new(synth)), log)
}

// ============================================================================
// SETTINGS AND DIRECTIVES
// ============================================================================

#[test]
fn test_setters_compose_and_reset_restores_defaults() {
    let (mut engine, _) = engine_with_log(scheme_page());

    engine.set_text_scale(TextScale::Large);
    engine.set_dyslexia_font(true);
    assert!(engine.document().root_has_class("text-large"));
    assert!(engine.document().root_has_class("dyslexia-font"));

    engine.reset();
    assert!(engine.document().root_has_class("text-medium"));
    assert!(!engine.document().root_has_class("text-large"));
    assert!(!engine.document().root_has_class("dyslexia-font"));
    assert_eq!(engine.text_scale(), TextScale::Medium);
    assert_eq!(engine.saturation(), Saturation::Normal);
    assert_eq!(engine.color_theme(), ColorTheme::Light);
    assert_eq!(engine.narration_state(), NarrationState::Idle);
}

#[test]
fn test_saturation_cycle_round_trip() {
    let (mut engine, _) = engine_with_log(scheme_page());

    assert_eq!(engine.cycle_saturation(), Saturation::High);
    assert_eq!(engine.cycle_saturation(), Saturation::Grayscale);
    assert_eq!(engine.cycle_saturation(), Saturation::Normal);
}

#[test]
fn test_high_saturation_with_inversion_keeps_saturate_term() {
    let (mut engine, _) = engine_with_log(scheme_page());

    engine.cycle_saturation(); // High
    engine.set_invert_colors(true);
    assert_eq!(
        engine.document().root_style("filter"),
        Some("saturate(200%) invert(1)")
    );
}

// ============================================================================
// FOCUS MASK
// ============================================================================

#[test]
fn test_focus_mask_subscription_and_geometry() {
    let (mut engine, _) = engine_with_log(scheme_page());
    assert_eq!(engine.pointer_subscriber_count(), 0);

    // Rapid toggling never leaves more than one subscription.
    for _ in 0..5 {
        engine.set_focus_mode(true);
        engine.set_focus_mode(true);
        engine.set_focus_mode(false);
    }
    engine.set_focus_mode(true);
    assert_eq!(engine.pointer_subscriber_count(), 1);
    assert!(engine.document().root_has_class("focus-mask"));

    let geo = engine.on_pointer_move(250.0, 400.0).unwrap();
    assert_eq!(geo.mask_top_height, 340.0);
    assert_eq!(geo.mask_bottom_start, 460.0);

    engine.set_focus_mode(false);
    assert_eq!(engine.pointer_subscriber_count(), 0);
    assert_eq!(engine.on_pointer_move(250.0, 400.0), None);
}

// ============================================================================
// NARRATION LIFECYCLE
// ============================================================================

#[test]
fn test_read_pause_resume_stop() {
    let (mut engine, log) = engine_with_log(scheme_page());
    engine.set_narration_enabled(true);

    engine.read_page().unwrap();
    assert!(engine.is_reading());
    assert_eq!(
        log.borrow().spoken,
        vec!["Eligible schemes. Three schemes match your profile. Apply now."]
    );

    engine.pause_narration();
    assert!(engine.is_paused());

    engine.resume_narration();
    assert!(engine.is_reading());

    engine.stop_narration();
    assert_eq!(engine.narration_state(), NarrationState::Idle);
    assert!(!log.borrow().speaking);
}

#[test]
fn test_empty_page_narrates_fallback() {
    let (mut engine, log) = engine_with_log(Document::new("/blank"));
    engine.set_narration_enabled(true);

    engine.read_page().unwrap();
    assert!(engine.is_reading());
    assert_eq!(log.borrow().spoken, vec![FALLBACK_UTTERANCE]);
}

#[test]
fn test_stop_before_completion_suppresses_stale_callback() {
    let (mut engine, _) = engine_with_log(scheme_page());
    engine.set_narration_enabled(true);

    let token = engine.read_page().unwrap();
    engine.stop_narration();
    assert_eq!(engine.narration_state(), NarrationState::Idle);

    // Start a new session, then deliver the old session's completion.
    engine.read_page().unwrap();
    engine.on_utterance_end(token);
    assert!(engine.is_reading(), "stale completion must not end the new session");
}

#[test]
fn test_natural_completion_returns_to_idle() {
    let (mut engine, _) = engine_with_log(scheme_page());
    engine.set_narration_enabled(true);

    let token = engine.read_page().unwrap();
    engine.on_utterance_end(token);
    assert_eq!(engine.narration_state(), NarrationState::Idle);
}

#[test]
fn test_navigation_while_reading_cancels() {
    let (mut engine, log) = engine_with_log(scheme_page());
    engine.set_narration_enabled(true);

    engine.read_page().unwrap();
    assert!(engine.is_reading());

    engine.navigate(Document::new("/applications"));
    assert_eq!(engine.narration_state(), NarrationState::Idle);
    assert!(!log.borrow().speaking);
    assert!(log.borrow().cancels >= 1);
}

#[test]
fn test_reset_silences_even_when_narration_disabled() {
    let (mut engine, log) = engine_with_log(scheme_page());

    let cancels_before = log.borrow().cancels;
    engine.reset();
    assert!(log.borrow().cancels > cancels_before);
    assert_eq!(engine.narration_state(), NarrationState::Idle);
}
