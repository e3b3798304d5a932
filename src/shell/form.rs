use crate::composer::{tone_options, ComposeRequest, Tone};

/// Mutable state behind the four form fields.
///
/// Recreated for every shell round; the composer receives a snapshot via
/// [`FormState::to_request`].
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub company_name: String,
    pub product_service: String,
    pub customer_message: String,
    pub tone: Tone,
}

impl FormState {
    /// Starts an empty form with the configured default tone preselected.
    pub fn with_default_tone(tone: Tone) -> Self {
        Self {
            tone,
            ..Self::default()
        }
    }

    pub fn to_request(&self) -> ComposeRequest {
        ComposeRequest {
            company_name: self.company_name.clone(),
            product_service: self.product_service.clone(),
            customer_message: self.customer_message.clone(),
            tone: self.tone,
        }
    }
}

/// Renders the tone picker shown before the message prompt, one numbered
/// `label - description` line per preset.
pub fn render_tone_menu() -> String {
    let mut menu = String::from("Response tone:\n");
    for (index, option) in tone_options().iter().enumerate() {
        menu.push_str(&format!(
            "  {}. {} - {}\n",
            index + 1,
            option.label,
            option.description
        ));
    }
    menu
}

/// Resolves a tone menu selection. Accepts a 1-based index or a tone name;
/// empty or unrecognized input keeps `current`.
pub fn select_tone(input: &str, current: Tone) -> Tone {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return current;
    }
    if let Ok(index) = trimmed.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| tone_options().get(i))
            .map(|option| option.value)
            .unwrap_or(current);
    }
    let lowered = trimmed.to_ascii_lowercase();
    tone_options()
        .iter()
        .find(|option| option.value.as_str() == lowered)
        .map(|option| option.value)
        .unwrap_or(current)
}
