//! Sahay Dashboard - Main Entry Point

use sahay_a11y::{AssistiveEngine, TextScale};
use sahay_client::BackendClient;
use sahay_dashboard::{ConsoleSynth, PanelAction, SettingsPanel};
use sahay_dom::Document;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Sahay dashboard shell...");

    // Backend base URL from the command line
    let backend_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000".to_string());

    let client = BackendClient::new(&backend_url)?;
    match client.list_schemes() {
        Ok(schemes) => log::info!("backend reachable, schemes payload: {}", schemes),
        Err(e) => log::warn!("backend not reachable ({}), continuing offline", e),
    }

    // The engine lives for the whole session.
    let mut engine = AssistiveEngine::new(landing_page(), Box::new(ConsoleSynth::new()));
    let panel = SettingsPanel::new();

    // Scripted walk through the panel contract.
    panel.toggle(&mut engine);
    panel.dispatch(&mut engine, PanelAction::SetTextScale(TextScale::Large));
    panel.dispatch(&mut engine, PanelAction::ToggleDyslexiaFont);
    panel.dispatch(&mut engine, PanelAction::ToggleNarration);
    for line in panel.render_summary(&engine) {
        log::info!("panel: {}", line);
    }

    if let Some(token) = engine.read_page() {
        engine.pause_narration();
        engine.resume_narration();
        engine.on_utterance_end(token);
    }

    engine.navigate(applications_page());
    engine.read_page();
    panel.dispatch(&mut engine, PanelAction::ResetAll);

    log::info!("root classes: {:?}", engine.document().get(engine.document().root()).map(|el| el.class_list()));
    Ok(())
}

/// Demo landing page content
fn landing_page() -> Document {
    let mut doc = Document::new("/dashboard");
    let h1 = doc.create_element("h1");
    let p = doc.create_element("p");
    let img = doc.create_element("img");
    doc.append_child(doc.root(), h1).ok();
    doc.append_child(doc.root(), p).ok();
    doc.append_child(doc.root(), img).ok();
    doc.set_text(h1, "Welcome to Sahay").ok();
    doc.set_text(p, "Find welfare schemes you are eligible for").ok();
    doc.set_attribute(img, "alt", "Citizens at a service counter").ok();
    doc
}

/// Demo applications page content
fn applications_page() -> Document {
    let mut doc = Document::new("/applications");
    let h1 = doc.create_element("h1");
    doc.append_child(doc.root(), h1).ok();
    doc.set_text(h1, "Your applications").ok();
    doc
}
