use serde::{Deserialize, Serialize};

/// Style preset controlling word choice in the greeting, body, and closing
/// templates.
///
/// Tones arriving from the form or the JSON pipe are never rejected: any
/// unrecognized value resolves to [`Tone::Professional`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Empathetic,
    Apologetic,
    Enthusiastic,
    Reassuring,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Empathetic => "empathetic",
            Tone::Apologetic => "apologetic",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Reassuring => "reassuring",
        }
    }

    /// Resolves a stored or user-supplied tone value. Unknown values fall
    /// back to the professional preset instead of failing.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "friendly" => Tone::Friendly,
            "empathetic" => Tone::Empathetic,
            "apologetic" => Tone::Apologetic,
            "enthusiastic" => Tone::Enthusiastic,
            "reassuring" => Tone::Reassuring,
            _ => Tone::Professional,
        }
    }
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        Tone::parse_or_default(&value)
    }
}

/// Entry in the static tone picker shown by the form shell.
#[derive(Debug, Clone, Copy)]
pub struct ToneOption {
    pub value: Tone,
    pub label: &'static str,
    pub description: &'static str,
}

const TONE_OPTIONS: [ToneOption; 6] = [
    ToneOption {
        value: Tone::Professional,
        label: "Professional",
        description: "Formal and business-like",
    },
    ToneOption {
        value: Tone::Friendly,
        label: "Friendly",
        description: "Warm and approachable",
    },
    ToneOption {
        value: Tone::Empathetic,
        label: "Empathetic",
        description: "Understanding and caring",
    },
    ToneOption {
        value: Tone::Apologetic,
        label: "Apologetic",
        description: "Acknowledging and regretful",
    },
    ToneOption {
        value: Tone::Enthusiastic,
        label: "Enthusiastic",
        description: "Positive and energetic",
    },
    ToneOption {
        value: Tone::Reassuring,
        label: "Reassuring",
        description: "Calming and confident",
    },
];

/// Returns the fixed set of tone presets offered by the form.
pub fn tone_options() -> &'static [ToneOption] {
    &TONE_OPTIONS
}
