//! Terminal form shell around the response composer.
//!
//! The shell collects the four form fields, renders the generated reply,
//! and owns the transient copy acknowledgment. Composition itself stays in
//! [`crate::composer`]; nothing here influences the generated text.

pub mod feedback;
pub mod form;
pub mod session;

pub use feedback::CopyFeedback;
pub use form::FormState;
pub use session::ComposeSession;
