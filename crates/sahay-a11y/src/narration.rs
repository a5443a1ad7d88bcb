//! Narration Controller
//!
//! Spoken read-back of visible page text with explicit play/pause/resume/
//! stop control. The speech facility itself sits behind the `SpeechSynth`
//! capability trait; completion is reported back by the host with the
//! session token returned from `read_page`.

use std::collections::HashSet;

use sahay_dom::{Document, NodeId};

/// Spoken when a page has no readable content
pub const FALLBACK_UTTERANCE: &str = "This page has no readable content.";

/// Terminates each narrated label
pub const LABEL_DELIMITER: &str = ". ";

/// Tags whose text is narrated; other elements contribute only through
/// these (or an explicit aria-label)
const NARRATED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "a", "button", "li", "label", "th", "td", "img",
];

/// Speech synthesis capability
///
/// The four operations plus the status queries the controller needs;
/// implemented by the host, faked in tests.
pub trait SpeechSynth {
    /// Start speaking `text`; replaces any current utterance
    fn speak(&mut self, text: &str);
    /// Cancel the current utterance, if any
    fn cancel(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_speaking(&self) -> bool;
    fn is_paused(&self) -> bool;
}

/// Narration playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrationState {
    #[default]
    Idle,
    Reading,
    Paused,
}

/// Identity of one narration session
///
/// Monotonically increasing; a completion notification carrying a token
/// from a superseded session is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionToken(u64);

/// Drives the single system-wide narration stream
pub struct NarrationController {
    synth: Box<dyn SpeechSynth>,
    state: NarrationState,
    utterance_text: Option<String>,
    session: u64,
}

impl NarrationController {
    pub fn new(synth: Box<dyn SpeechSynth>) -> Self {
        Self {
            synth,
            state: NarrationState::Idle,
            utterance_text: None,
            session: 0,
        }
    }

    pub fn state(&self) -> NarrationState {
        self.state
    }

    pub fn is_reading(&self) -> bool {
        self.state == NarrationState::Reading
    }

    pub fn is_paused(&self) -> bool {
        self.state == NarrationState::Paused
    }

    /// Text of the in-flight utterance, if any
    pub fn utterance_text(&self) -> Option<&str> {
        self.utterance_text.as_deref()
    }

    /// Extract and speak the page's visible text
    ///
    /// No-op while narration is disabled. Any in-flight utterance is
    /// canceled first; an empty page speaks the fallback phrase. Returns
    /// the token the host hands back when the utterance ends.
    pub fn read_page(&mut self, doc: &Document, enabled: bool) -> Option<SessionToken> {
        if !enabled {
            return None;
        }

        let mut text = extract_readable_text(doc);
        if text.is_empty() {
            text = FALLBACK_UTTERANCE.to_string();
        }

        // One utterance system-wide: cancel before speaking.
        self.synth.cancel();
        self.session += 1;
        self.synth.speak(&text);
        self.state = NarrationState::Reading;
        self.utterance_text = Some(text);
        log::debug!("narration session {} started", self.session);
        Some(SessionToken(self.session))
    }

    /// Pause playback; a no-op unless the synth is actively speaking
    /// and not already paused
    pub fn pause(&mut self) {
        if self.state == NarrationState::Reading && self.synth.is_speaking() && !self.synth.is_paused()
        {
            self.synth.pause();
            self.state = NarrationState::Paused;
        }
    }

    /// Resume playback; a no-op unless the synth reports a paused state
    pub fn resume(&mut self) {
        if self.state == NarrationState::Paused && self.synth.is_paused() {
            self.synth.resume();
            self.state = NarrationState::Reading;
        }
    }

    /// Cancel any in-flight utterance and return to Idle; always succeeds
    pub fn stop(&mut self) {
        self.synth.cancel();
        // Retire the session so a completion for the canceled utterance
        // is recognized as stale.
        self.session += 1;
        self.state = NarrationState::Idle;
        self.utterance_text = None;
    }

    /// Host notification that an utterance finished naturally
    ///
    /// Stale tokens (superseded or stopped sessions) have no effect.
    pub fn on_utterance_end(&mut self, token: SessionToken) {
        if token.0 != self.session {
            log::debug!("discarding stale narration completion {}", token.0);
            return;
        }
        self.state = NarrationState::Idle;
        self.utterance_text = None;
    }
}

/// Collect the page's visible narrated text in document order
///
/// Per element the label is its text content, else its aria-label, else
/// its alt text, whitespace-normalized; exact duplicates of labels
/// already collected are skipped so nested elements are not repeated.
pub fn extract_readable_text(doc: &Document) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = String::new();

    for id in doc.document_order() {
        if !doc.is_visible(id) {
            continue;
        }
        let Some(label) = effective_label(doc, id) else {
            continue;
        };
        if !seen.insert(label.clone()) {
            continue;
        }
        out.push_str(&label);
        out.push_str(LABEL_DELIMITER);
    }

    out.trim_end().to_string()
}

/// Effective label of one element, if it is narrated at all
fn effective_label(doc: &Document, id: NodeId) -> Option<String> {
    let el = doc.get(id)?;
    let narrated_tag = NARRATED_TAGS.contains(&el.tag.as_str());
    let aria_label = el.attribute("aria-label").map(normalize_whitespace);

    if !narrated_tag && aria_label.is_none() {
        return None;
    }

    let text = normalize_whitespace(&doc.text_content(id));
    if !text.is_empty() {
        return Some(text);
    }
    if let Some(aria) = aria_label.filter(|l| !l.is_empty()) {
        return Some(aria);
    }
    el.attribute("alt")
        .map(normalize_whitespace)
        .filter(|alt| !alt.is_empty())
}

/// Collapse internal whitespace runs to single spaces
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records calls and mimics the host synth's status flags
    #[derive(Debug, Default)]
    struct FakeSynthState {
        speaking: bool,
        paused: bool,
        spoken: Vec<String>,
        cancels: usize,
    }

    #[derive(Debug, Clone, Default)]
    struct FakeSynth(Rc<RefCell<FakeSynthState>>);

    impl FakeSynth {
        fn state(&self) -> Rc<RefCell<FakeSynthState>> {
            Rc::clone(&self.0)
        }
    }

    impl SpeechSynth for FakeSynth {
        fn speak(&mut self, text: &str) {
            let mut s = self.0.borrow_mut();
            s.speaking = true;
            s.paused = false;
            s.spoken.push(text.to_string());
        }

        fn cancel(&mut self) {
            let mut s = self.0.borrow_mut();
            s.speaking = false;
            s.paused = false;
            s.cancels += 1;
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

    fn controller() -> (NarrationController, Rc<RefCell<FakeSynthState>>) {
        let synth = FakeSynth::default();
        let state = synth.state();
        (NarrationController::new(Box::new(synth)), state)
    }

    fn page_with_text() -> Document {
        let mut doc = Document::new("/schemes");
        let h1 = doc.create_element("h1");
        let p = doc.create_element("p");
        doc.append_child(doc.root(), h1).unwrap();
        doc.append_child(doc.root(), p).unwrap();
        doc.set_text(h1, "Welfare schemes").unwrap();
        doc.set_text(p, "Twelve schemes   match\nyour profile").unwrap();
        doc
    }

    #[test]
    fn test_read_page_extracts_and_reads() {
        let (mut ctl, state) = controller();
        let doc = page_with_text();

        let token = ctl.read_page(&doc, true);
        assert!(token.is_some());
        assert_eq!(ctl.state(), NarrationState::Reading);
        assert_eq!(
            state.borrow().spoken,
            vec!["Welfare schemes. Twelve schemes match your profile."]
        );
    }

    #[test]
    fn test_read_page_disabled_is_noop() {
        let (mut ctl, state) = controller();
        let doc = page_with_text();

        assert_eq!(ctl.read_page(&doc, false), None);
        assert_eq!(ctl.state(), NarrationState::Idle);
        assert!(state.borrow().spoken.is_empty());
    }

    #[test]
    fn test_empty_page_speaks_fallback() {
        let (mut ctl, state) = controller();
        let doc = Document::new("/blank");

        ctl.read_page(&doc, true);
        assert_eq!(ctl.state(), NarrationState::Reading);
        assert_eq!(state.borrow().spoken, vec![FALLBACK_UTTERANCE]);
    }

    #[test]
    fn test_hidden_text_not_narrated() {
        let (mut ctl, state) = controller();
        let mut doc = page_with_text();
        let hidden = doc.create_element("p");
        doc.append_child(doc.root(), hidden).unwrap();
        doc.set_text(hidden, "internal note").unwrap();
        doc.set_hidden(hidden, true).unwrap();

        ctl.read_page(&doc, true);
        assert!(!state.borrow().spoken[0].contains("internal note"));
    }

    #[test]
    fn test_pause_resume_guards() {
        let (mut ctl, state) = controller();
        let doc = page_with_text();

        // Pause before anything is speaking: no-op.
        ctl.pause();
        assert_eq!(ctl.state(), NarrationState::Idle);
        // Resume with nothing paused: no-op.
        ctl.resume();
        assert_eq!(ctl.state(), NarrationState::Idle);

        ctl.read_page(&doc, true);
        ctl.pause();
        assert_eq!(ctl.state(), NarrationState::Paused);
        assert!(state.borrow().paused);

        // Second pause while already paused: no-op.
        ctl.pause();
        assert_eq!(ctl.state(), NarrationState::Paused);

        ctl.resume();
        assert_eq!(ctl.state(), NarrationState::Reading);
        assert!(!state.borrow().paused);
    }

    #[test]
    fn test_stop_cancels_and_discards_stale_completion() {
        let (mut ctl, state) = controller();
        let doc = page_with_text();

        let token = ctl.read_page(&doc, true).unwrap();
        ctl.stop();
        assert_eq!(ctl.state(), NarrationState::Idle);
        assert!(state.borrow().cancels >= 1);
        assert!(!state.borrow().speaking);

        // Completion for the canceled session arrives late.
        ctl.on_utterance_end(token);
        assert_eq!(ctl.state(), NarrationState::Idle);
        assert_eq!(ctl.utterance_text(), None);
    }

    #[test]
    fn test_new_session_supersedes_old_token() {
        let (mut ctl, _) = controller();
        let doc = page_with_text();

        let first = ctl.read_page(&doc, true).unwrap();
        let second = ctl.read_page(&doc, true).unwrap();
        assert_ne!(first, second);

        ctl.on_utterance_end(first);
        assert_eq!(ctl.state(), NarrationState::Reading, "stale token ignored");

        ctl.on_utterance_end(second);
        assert_eq!(ctl.state(), NarrationState::Idle);
    }

    #[test]
    fn test_duplicate_labels_skipped() {
        let mut doc = Document::new("/schemes");
        let li = doc.create_element("li");
        let a = doc.create_element("a");
        doc.append_child(doc.root(), li).unwrap();
        doc.append_child(li, a).unwrap();
        doc.set_text(a, "Open application").unwrap();

        // li's aggregated text equals the nested link's; spoken once.
        assert_eq!(extract_readable_text(&doc), "Open application.");
    }

    #[test]
    fn test_label_priority_alt_and_aria() {
        let mut doc = Document::new("/schemes");
        let img = doc.create_element("img");
        let nav = doc.create_element("div");
        doc.append_child(doc.root(), img).unwrap();
        doc.append_child(doc.root(), nav).unwrap();
        doc.set_attribute(img, "alt", "Scheme poster").unwrap();
        doc.set_attribute(nav, "aria-label", "Primary navigation").unwrap();

        assert_eq!(extract_readable_text(&doc), "Scheme poster. Primary navigation.");
    }
}
