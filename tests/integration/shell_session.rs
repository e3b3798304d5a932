use chrono::{Duration, Utc};
use replybase::clipboard;
use replybase::composer::{compose, ComposeRequest, Tone, MISSING_FIELDS_MESSAGE};
use replybase::config::AppConfig;
use replybase::shell::form::select_tone;
use replybase::shell::{ComposeSession, CopyFeedback};

#[test]
fn session_flow_matches_a_direct_composer_call() {
    let mut config = AppConfig::default();
    config.default_tone = Tone::Empathetic;
    let mut session = ComposeSession::new(config);
    session.set_company_name("Acme");
    session.set_product_service("Widget");
    session.set_customer_message("I'm disappointed with my last order");

    let expected = compose(&ComposeRequest {
        company_name: "Acme".into(),
        product_service: "Widget".into(),
        customer_message: "I'm disappointed with my last order".into(),
        tone: Tone::Empathetic,
    });
    assert_eq!(session.generate(), expected);
}

#[test]
fn tone_selection_overrides_the_configured_default() {
    let mut config = AppConfig::default();
    config.default_tone = Tone::Friendly;
    let mut session = ComposeSession::new(config);

    // Unrecognized menu input keeps the configured default.
    let kept = select_tone("cheerful", session.form().tone);
    assert_eq!(kept, Tone::Friendly);

    session.set_tone(select_tone("5", session.form().tone));
    assert_eq!(session.form().tone, Tone::Enthusiastic);
}

#[test]
fn generation_reports_missing_fields_without_failing() {
    let mut session = ComposeSession::new(AppConfig::default());
    session.set_company_name("Acme");
    assert_eq!(session.generate(), MISSING_FIELDS_MESSAGE);
}

#[test]
fn copied_notice_expires_after_the_configured_window() {
    let raised_at = Utc::now();
    let notice = CopyFeedback::raised_at(raised_at, 750);
    assert!(notice.is_visible(raised_at + Duration::milliseconds(749)));
    assert!(!notice.is_visible(raised_at + Duration::milliseconds(750)));
}

// Headless runners have no clipboard provider; the round-trip is asserted
// only when the write succeeds.
#[test]
fn successful_copy_round_trips_byte_for_byte() {
    let response = compose(&ComposeRequest {
        company_name: "Acme".into(),
        product_service: "Widget".into(),
        customer_message: "The Widget stopped working yesterday".into(),
        tone: Tone::Reassuring,
    });
    if clipboard::copy_text(&response) {
        let mut provider = arboard::Clipboard::new().expect("provider exists after copy");
        let pasted = provider.get_text().expect("clipboard read");
        assert_eq!(pasted, response);
    }
}
