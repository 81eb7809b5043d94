//! Random quiz generator.
//!
//! # Responsibility
//! - Drive the `Setup -> InProgress -> Finished` session state machine.
//! - Own the countdown timer handle for the running session.
//!
//! # Invariants
//! - A countdown is armed only while the phase is `InProgress`.
//! - Every exit from `InProgress` (all answered, time up, restart, panel
//!   drop) cancels the countdown exactly once.
//! - A rejected `start` leaves the whole session untouched.

use crate::config::QuizConfig;
use crate::error::{PanelError, PanelResult};
use crate::model::quiz::{parse_quiz_items, select_questions, FinishReason, QuizPhase, QuizView};
use crate::timer::{TimerDriver, TimerHandle};
use log::{debug, info};
use rand::Rng;
use std::rc::Rc;
use std::time::Duration;

const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct QuizPanel {
    config: QuizConfig,
    timers: Rc<dyn TimerDriver>,
    topic: String,
    items_draft: String,
    source_text: String,
    questions: Vec<String>,
    index: usize,
    score: usize,
    time_left: u32,
    phase: QuizPhase,
    finish_reason: Option<FinishReason>,
    countdown: Option<TimerHandle>,
}

impl QuizPanel {
    pub fn new(config: QuizConfig, timers: Rc<dyn TimerDriver>) -> Self {
        Self {
            config,
            timers,
            topic: String::new(),
            items_draft: String::new(),
            source_text: String::new(),
            questions: Vec::new(),
            index: 0,
            score: 0,
            time_left: config.countdown_secs,
            phase: QuizPhase::Setup,
            finish_reason: None,
            countdown: None,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn current_question(&self) -> Option<&str> {
        match self.phase {
            QuizPhase::InProgress => self.questions.get(self.index).map(String::as_str),
            _ => None,
        }
    }

    pub fn countdown_active(&self) -> bool {
        self.countdown
            .as_ref()
            .is_some_and(|handle| handle.is_active())
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Free-text topic label; not used for selection.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn items_draft(&self) -> &str {
        &self.items_draft
    }

    pub fn set_items_draft(&mut self, items_text: impl Into<String>) {
        self.items_draft = items_text.into();
    }

    /// Starts from the items draft.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PanelResult<usize> {
        let text = self.items_draft.clone();
        self.start(&text, rng)
    }

    /// Starts a new session from one-item-per-line text.
    ///
    /// Returns the number of selected questions.
    pub fn start<R: Rng + ?Sized>(&mut self, items_text: &str, rng: &mut R) -> PanelResult<usize> {
        let items = parse_quiz_items(items_text);
        if items.len() < self.config.min_items {
            debug!(
                "event=quiz_start module=quiz status=rejected found={} required={}",
                items.len(),
                self.config.min_items
            );
            return Err(PanelError::NotEnoughItems {
                found: items.len(),
                required: self.config.min_items,
            });
        }

        self.stop_countdown();
        self.questions = select_questions(items, self.config.max_questions, rng);
        self.source_text = items_text.to_string();
        self.index = 0;
        self.score = 0;
        self.time_left = self.config.countdown_secs;
        self.finish_reason = None;
        self.phase = QuizPhase::InProgress;
        self.countdown = Some(TimerHandle::start(self.timers.clone(), TICK_PERIOD));

        info!(
            "event=quiz_start module=quiz status=ok questions={} countdown_secs={}",
            self.questions.len(),
            self.time_left
        );
        Ok(self.questions.len())
    }

    /// Reshuffles the text used by the last successful start.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PanelResult<usize> {
        let text = self.source_text.clone();
        self.start(&text, rng)
    }

    /// Self-reported answer for the current question.
    pub fn answer(&mut self, correct: bool) -> PanelResult<QuizPhase> {
        if self.phase != QuizPhase::InProgress {
            return Err(PanelError::NotInProgress);
        }
        if correct {
            self.score += 1;
        }
        self.index += 1;
        if self.index >= self.questions.len() {
            self.finish(FinishReason::Answered);
        }
        Ok(self.phase)
    }

    /// One countdown period elapsed. Ignored outside `InProgress`.
    pub fn tick(&mut self) -> QuizPhase {
        if self.phase != QuizPhase::InProgress {
            return self.phase;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.finish(FinishReason::TimeUp);
        }
        self.phase
    }

    pub fn view(&self) -> QuizView {
        QuizView {
            phase: self.phase,
            topic: self.topic.clone(),
            current_question: self.current_question().map(str::to_string),
            position: match self.phase {
                QuizPhase::InProgress => self.index + 1,
                _ => self.index,
            },
            total: self.questions.len(),
            score: self.score,
            time_left: self.time_left,
            finish_reason: self.finish_reason,
        }
    }

    fn finish(&mut self, reason: FinishReason) {
        self.phase = QuizPhase::Finished;
        self.finish_reason = Some(reason);
        self.stop_countdown();
        info!(
            "event=quiz_finish module=quiz status=ok reason={:?} score={} total={}",
            reason,
            self.score,
            self.questions.len()
        );
    }

    fn stop_countdown(&mut self) {
        if let Some(mut handle) = self.countdown.take() {
            handle.cancel();
        }
    }
}
