use replybase::composer::{compose, ComposeRequest, Tone, MISSING_FIELDS_MESSAGE};

#[test]
fn every_missing_required_field_yields_the_fixed_message() {
    let complete = ComposeRequest {
        company_name: "Acme".into(),
        product_service: "Widget".into(),
        customer_message: "Where is my order?".into(),
        tone: Tone::Empathetic,
    };

    let clears: [fn(&mut ComposeRequest); 3] = [
        |r| r.company_name.clear(),
        |r| r.product_service.clear(),
        |r| r.customer_message.clear(),
    ];
    for clear in clears {
        let mut request = complete.clone();
        clear(&mut request);
        assert_eq!(compose(&request), MISSING_FIELDS_MESSAGE);
    }

    assert_eq!(compose(&ComposeRequest::default()), MISSING_FIELDS_MESSAGE);
}

#[test]
fn wire_requests_use_camel_case_field_names() {
    let request: ComposeRequest = serde_json::from_str(
        r#"{
            "companyName": "Acme",
            "productService": "Widget",
            "customerMessage": "Could you explain the warranty?",
            "tone": "reassuring"
        }"#,
    )
    .expect("camelCase request should deserialize");
    assert_eq!(request.tone, Tone::Reassuring);
    assert!(compose(&request).contains("rest assured"));
}

#[test]
fn unknown_wire_tone_matches_professional_output() {
    let payload = |tone: &str| {
        format!(
            r#"{{
                "companyName": "Acme",
                "productService": "Widget",
                "customerMessage": "What plans do you offer?",
                "tone": "{tone}"
            }}"#
        )
    };
    let unknown: ComposeRequest = serde_json::from_str(&payload("managerial")).unwrap();
    let professional: ComposeRequest = serde_json::from_str(&payload("professional")).unwrap();
    assert_eq!(unknown.tone, Tone::Professional);
    assert_eq!(compose(&unknown), compose(&professional));
}

#[test]
fn omitted_wire_tone_defaults_to_professional() {
    let request: ComposeRequest = serde_json::from_str(
        r#"{
            "companyName": "Acme",
            "productService": "Widget",
            "customerMessage": "Thanks for the quick delivery"
        }"#,
    )
    .unwrap();
    assert_eq!(request.tone, Tone::Professional);
    assert!(compose(&request).starts_with("Thank you for contacting Acme. "));
}
