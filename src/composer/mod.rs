//! The response composer: a pure function from one form submission to the
//! generated customer-service reply.
//!
//! Composition never fails and performs no I/O; the only reported condition
//! is a missing required field, which yields [`MISSING_FIELDS_MESSAGE`]
//! instead of a generated reply.

pub mod classify;
pub mod templates;
pub mod tone;

pub use classify::{classify, is_complaint, is_question, MessageKind};
pub use tone::{tone_options, Tone, ToneOption};

use serde::{Deserialize, Serialize};

/// Fixed output returned when a required field is empty.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please fill in all required fields to generate a response.";

/// One submission of the response form. Flat value object, rebuilt for
/// every generation call; camelCase field names are the wire shape read by
/// the JSON pipe mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    pub company_name: String,
    pub product_service: String,
    pub customer_message: String,
    #[serde(default)]
    pub tone: Tone,
}

/// Generates the reply for a request.
///
/// Deterministic: identical requests produce identical output. The assembly
/// is a fixed concatenation of greeting, classified body, and closing, with
/// `\n\n` between paragraphs and single `\n` separators inside the
/// signature block.
pub fn compose(request: &ComposeRequest) -> String {
    if request.company_name.is_empty()
        || request.customer_message.is_empty()
        || request.product_service.is_empty()
    {
        return MISSING_FIELDS_MESSAGE.to_string();
    }

    let tone = request.tone;
    let mut response = templates::greeting(tone, &request.company_name);

    match classify::classify(&request.customer_message) {
        MessageKind::Complaint => {
            response.push_str(&templates::complaint_acknowledgment(
                &request.product_service,
            ));
            response.push_str(templates::COMPLAINT_COMMITMENT);
            if let Some(clause) = templates::complaint_empathy(tone) {
                response.push_str(clause);
            }
            response.push_str(templates::COMPLAINT_DETAILS_REQUEST);
            response.push_str(templates::COMPLAINT_ESCALATION);
        }
        MessageKind::Question => {
            response.push_str(&templates::question_acknowledgment(
                &request.product_service,
            ));
            if let Some(clause) = templates::question_enthusiasm(tone, &request.product_service) {
                response.push_str(&clause);
            }
            response.push_str(templates::QUESTION_ACCURACY);
            response.push_str(templates::QUESTION_DETAILS_REQUEST);
        }
        MessageKind::Comment => {
            response.push_str(&templates::comment_acknowledgment(&request.product_service));
            response.push_str(templates::COMMENT_OFFER);
        }
    }

    response.push_str(&templates::closing(
        tone,
        &request.company_name,
        &request.product_service,
    ));
    response
}
