use crate::clipboard;
use crate::composer::{compose, Tone};
use crate::config::AppConfig;

use super::feedback::CopyFeedback;
use super::form::FormState;

/// Facade owning the form state for one shell run.
///
/// Wires the configured defaults into the form and the clipboard copy into
/// the acknowledgment state. Generation itself delegates to the composer
/// and inherits its contract, including the missing-fields message.
pub struct ComposeSession {
    form: FormState,
    config: AppConfig,
}

impl ComposeSession {
    pub fn new(config: AppConfig) -> Self {
        Self {
            form: FormState::with_default_tone(config.default_tone),
            config,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.form.company_name = value.into();
    }

    pub fn set_product_service(&mut self, value: impl Into<String>) {
        self.form.product_service = value.into();
    }

    pub fn set_customer_message(&mut self, value: impl Into<String>) {
        self.form.customer_message = value.into();
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.form.tone = tone;
    }

    pub fn clipboard_enabled(&self) -> bool {
        self.config.clipboard.enabled
    }

    /// Generates the reply for the current form state.
    pub fn generate(&self) -> String {
        compose(&self.form.to_request())
    }

    /// Attempts the clipboard write for an already-rendered response.
    /// Returns the raised acknowledgment on success; `None` when the
    /// clipboard is disabled or the write failed.
    pub fn copy(&self, response: &str) -> Option<CopyFeedback> {
        if !self.config.clipboard.enabled {
            return None;
        }
        clipboard::copy_text(response)
            .then(|| CopyFeedback::raised(self.config.shell.copied_notice_ms))
    }
}
