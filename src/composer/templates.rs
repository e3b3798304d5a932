//! Literal template text for the generated responses.
//!
//! Every user-visible sentence lives here, keyed by [`Tone`] where the
//! wording varies. Snapshot tests depend on this text byte-for-byte, so
//! edits here are output-format changes.

use super::tone::Tone;

/// Opening sentence fragment. Ends mid-sentence (trailing space, or comma
/// plus space) so the body branch continues it directly.
pub fn greeting(tone: Tone, company_name: &str) -> String {
    match tone {
        Tone::Friendly => format!("Hi there! Thanks so much for reaching out to {company_name}. "),
        Tone::Empathetic => format!(
            "Thank you for taking the time to contact {company_name}. I understand your concern, "
        ),
        Tone::Apologetic => format!(
            "Thank you for contacting {company_name}. I sincerely apologize for any inconvenience, "
        ),
        Tone::Enthusiastic => {
            format!("Hello! We're delighted to hear from you at {company_name}! ")
        }
        Tone::Reassuring => format!(
            "Thank you for contacting {company_name}. I'm here to help resolve this for you, "
        ),
        Tone::Professional => format!("Thank you for contacting {company_name}. "),
    }
}

pub fn complaint_acknowledgment(product_service: &str) -> String {
    format!("and I want to acknowledge the issue you've experienced with {product_service}.\n\n")
}

pub const COMPLAINT_COMMITMENT: &str =
    "Your feedback is invaluable to us, and I'm committed to making this right. ";

/// Extra empathy sentence inserted into the complaint branch. Only the
/// empathetic, apologetic, and reassuring tones add one.
pub fn complaint_empathy(tone: Tone) -> Option<&'static str> {
    match tone {
        Tone::Empathetic => Some("I can understand how frustrating this must be for you. "),
        Tone::Apologetic => {
            Some("I'm truly sorry this happened and want to resolve it immediately. ")
        }
        Tone::Reassuring => Some(
            "Please know that we take all concerns seriously and will work diligently to resolve this. ",
        ),
        _ => None,
    }
}

pub const COMPLAINT_DETAILS_REQUEST: &str = "I'd like to help you resolve this matter promptly. \
Could you please provide any additional details about the specific issue you encountered? \
This will help me ensure we address your concern thoroughly.\n\n";

pub const COMPLAINT_ESCALATION: &str = "In the meantime, I'm escalating your case to our \
specialized team to ensure you receive the best possible solution.";

pub fn question_acknowledgment(product_service: &str) -> String {
    format!("and I'm happy to help answer your question about {product_service}.\n\n")
}

/// Extra enthusiasm sentence inserted into the question branch. Only the
/// friendly, enthusiastic, and professional tones add one.
pub fn question_enthusiasm(tone: Tone, product_service: &str) -> Option<String> {
    match tone {
        Tone::Friendly => Some("I'd love to help you out with this! ".to_string()),
        Tone::Enthusiastic => Some(format!(
            "I'm excited to share more information about our {product_service}! "
        )),
        Tone::Professional => {
            Some("I'll be pleased to provide you with the information you need. ".to_string())
        }
        _ => None,
    }
}

pub const QUESTION_ACCURACY: &str = "Based on your inquiry, I want to make sure I give you the \
most accurate and helpful information possible.\n\n";

pub const QUESTION_DETAILS_REQUEST: &str = "Could you please provide a bit more detail about \
your specific question? This will allow me to give you a comprehensive and tailored response \
that addresses exactly what you're looking for.";

pub fn comment_acknowledgment(product_service: &str) -> String {
    format!(
        "and I appreciate you taking the time to share your thoughts about {product_service}.\n\n"
    )
}

pub const COMMENT_OFFER: &str = "Your message is important to us, and I want to ensure I \
provide you with the most helpful response possible. Could you please let me know how I can \
best assist you today?";

/// Sign-off block. Starts with a blank line and ends with the team name and
/// company name on their own lines.
pub fn closing(tone: Tone, company_name: &str, product_service: &str) -> String {
    match tone {
        Tone::Friendly => format!(
            "\n\nI'm here to help and looking forward to hearing back from you soon!\n\nWarm regards,\nCustomer Service Team\n{company_name}"
        ),
        Tone::Empathetic => format!(
            "\n\nI'm personally committed to ensuring your experience with {company_name} meets your expectations. Please don't hesitate to reach out if you need anything else.\n\nWith care,\nCustomer Service Team\n{company_name}"
        ),
        Tone::Apologetic => format!(
            "\n\nOnce again, I apologize for any inconvenience this may have caused. We truly value your business and are committed to making this right.\n\nSincerely,\nCustomer Service Team\n{company_name}"
        ),
        Tone::Enthusiastic => format!(
            "\n\nWe're so grateful for customers like you! Can't wait to help make your experience with {product_service} absolutely amazing!\n\nWith enthusiasm,\nCustomer Service Team\n{company_name}"
        ),
        Tone::Reassuring => format!(
            "\n\nPlease rest assured that we're here to support you every step of the way. You can count on us to resolve this matter to your satisfaction.\n\nBest regards,\nCustomer Service Team\n{company_name}"
        ),
        Tone::Professional => format!(
            "\n\nI look forward to your response and the opportunity to assist you further.\n\nBest regards,\nCustomer Service Team\n{company_name}"
        ),
    }
}
