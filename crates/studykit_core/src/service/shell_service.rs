//! Outer-shell stubs: symptom checker and echo chatbot.
//!
//! # Responsibility
//! - Track the bottom-navigation section.
//! - Produce the canned symptom analysis and echo chat replies.
//!
//! # Invariants
//! - No diagnosis logic: analysis text only restates the input.
//! - Blank submissions never change state.

use crate::error::{PanelError, PanelResult};
use crate::model::shell::{ChatAuthor, ChatMessage, ShellSection, SymptomReport};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static SYMPTOM_SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;\n]+").expect("valid symptom separator regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const ANALYSIS_DISCLAIMER: &str =
    "This is not a medical diagnosis. Please consult a healthcare professional.";

/// Splits free text into normalized symptom mentions.
pub fn split_symptoms(text: &str) -> Vec<String> {
    SYMPTOM_SEPARATOR_RE
        .split(text)
        .map(|part| WHITESPACE_RE.replace_all(part.trim(), " ").into_owned())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Canned analysis for a non-empty symptom list.
pub fn canned_analysis(symptoms: &[String]) -> String {
    format!(
        "Based on the symptoms you described ({}), we recommend rest and hydration. {}",
        symptoms.join(", "),
        ANALYSIS_DISCLAIMER
    )
}

/// Echo reply used until a real model is wired in.
pub fn echo_reply(message: &str) -> String {
    format!("You said: {message}")
}

/// Symptom checker, analysis result and chat, addressed by shell anchors.
#[derive(Debug, Default)]
pub struct Shell {
    section: ShellSection,
    symptoms_draft: String,
    report: Option<SymptomReport>,
    transcript: Vec<ChatMessage>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> ShellSection {
        self.section
    }

    pub fn navigate(&mut self, section: ShellSection) {
        self.section = section;
    }

    /// Navigates by anchor (`#chat`); unknown anchors leave the section.
    pub fn navigate_anchor(&mut self, anchor: &str) -> Option<ShellSection> {
        let section = ShellSection::from_anchor(anchor)?;
        self.navigate(section);
        Some(section)
    }

    pub fn symptoms_draft(&self) -> &str {
        &self.symptoms_draft
    }

    pub fn set_symptoms_draft(&mut self, text: impl Into<String>) {
        self.symptoms_draft = text.into();
    }

    pub fn report(&self) -> Option<&SymptomReport> {
        self.report.as_ref()
    }

    /// Replaces the report and jumps to the analysis section.
    pub fn analyze(&mut self, text: &str) -> PanelResult<&SymptomReport> {
        let symptoms = split_symptoms(text);
        if symptoms.is_empty() {
            debug!("event=symptom_analyze module=shell status=rejected reason=blank");
            return Err(PanelError::BlankMessage);
        }
        let analysis = canned_analysis(&symptoms);
        debug!(
            "event=symptom_analyze module=shell status=ok symptoms={}",
            symptoms.len()
        );
        self.section = ShellSection::Analysis;
        Ok(self.report.insert(SymptomReport { symptoms, analysis }))
    }

    pub fn submit_symptoms(&mut self) -> PanelResult<&SymptomReport> {
        let text = self.symptoms_draft.clone();
        self.analyze(&text)
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Appends the user message and the bot's echo; returns the reply.
    pub fn send(&mut self, message: &str) -> PanelResult<&ChatMessage> {
        let text = message.trim();
        if text.is_empty() {
            return Err(PanelError::BlankMessage);
        }
        self.transcript.push(ChatMessage {
            author: ChatAuthor::User,
            text: text.to_string(),
        });
        self.transcript.push(ChatMessage {
            author: ChatAuthor::Bot,
            text: echo_reply(text),
        });
        debug!(
            "event=chat_send module=shell status=ok messages={}",
            self.transcript.len()
        );
        Ok(&self.transcript[self.transcript.len() - 1])
    }

    pub fn clear_chat(&mut self) {
        self.transcript.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{split_symptoms, Shell};
    use crate::error::PanelError;
    use crate::model::shell::{ChatAuthor, ShellSection};

    #[test]
    fn split_symptoms_normalizes_separators_and_spaces() {
        assert_eq!(
            split_symptoms(" headache ,  sore   throat;;\nfever \n"),
            vec!["headache", "sore throat", "fever"]
        );
        assert!(split_symptoms(" , ;\n ").is_empty());
    }

    #[test]
    fn analyze_sets_report_and_moves_to_analysis() {
        let mut shell = Shell::new();
        shell.set_symptoms_draft("cough, fever");
        let report = shell.submit_symptoms().expect("symptoms");
        assert_eq!(report.symptoms, vec!["cough", "fever"]);
        assert!(report.analysis.contains("cough, fever"));
        assert_eq!(shell.section(), ShellSection::Analysis);
    }

    #[test]
    fn blank_analysis_keeps_previous_report() {
        let mut shell = Shell::new();
        shell.analyze("cough").unwrap();
        assert_eq!(shell.analyze("   ").unwrap_err(), PanelError::BlankMessage);
        assert_eq!(shell.report().map(|r| r.symptoms.len()), Some(1));
    }

    #[test]
    fn chat_echoes_trimmed_messages() {
        let mut shell = Shell::new();
        let reply = shell.send("  hello ").expect("reply");
        assert_eq!(reply.author, ChatAuthor::Bot);
        assert_eq!(reply.text, "You said: hello");
        assert_eq!(shell.transcript().len(), 2);
        assert!(shell.send("").is_err());
        shell.clear_chat();
        assert!(shell.transcript().is_empty());
    }

    #[test]
    fn unknown_anchor_keeps_section() {
        let mut shell = Shell::new();
        assert_eq!(shell.navigate_anchor("#chat"), Some(ShellSection::Chat));
        assert_eq!(shell.navigate_anchor("#settings"), None);
        assert_eq!(shell.section(), ShellSection::Chat);
    }
}
