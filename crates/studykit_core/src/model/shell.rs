//! Outer-shell records: bottom navigation, symptom report, chat transcript.

use serde::{Deserialize, Serialize};

/// Anchor targets exposed by the fixed bottom navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellSection {
    #[default]
    Symptom,
    Analysis,
    Chat,
}

impl ShellSection {
    pub const ALL: [ShellSection; 3] = [Self::Symptom, Self::Analysis, Self::Chat];

    /// Anchor id without the leading `#`.
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Symptom => "symptom",
            Self::Analysis => "analysis",
            Self::Chat => "chat",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Symptom => "Symptoms",
            Self::Analysis => "Analysis",
            Self::Chat => "Chat",
        }
    }

    /// Accepts `symptom` or `#symptom`.
    pub fn from_anchor(value: &str) -> Option<Self> {
        let anchor = value.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.anchor() == anchor)
    }
}

/// Latest symptom submission and its canned analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub symptoms: Vec<String>,
    pub analysis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAuthor {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::ShellSection;

    #[test]
    fn anchors_round_trip_with_or_without_hash() {
        for section in ShellSection::ALL {
            assert_eq!(ShellSection::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(ShellSection::from_anchor("#chat"), Some(ShellSection::Chat));
        assert_eq!(ShellSection::from_anchor("#home"), None);
    }
}
