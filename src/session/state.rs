//! Quiz state tracking
//!
//! Maintains:
//! - The sentence being drilled
//! - Cursor into the target (in characters)
//! - The revealed prefix, always `target[..cursor]`
//! - Where the session is in its lifecycle

use crate::corpus::Sentence;

/// Lifecycle of one quiz
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Prompt shown, audio starting
    Presenting,
    /// Waiting for the learner to type the character under the cursor
    AwaitingMatch,
    /// Whole target typed or skipped through
    Revealed,
    /// Learner moved on to the next sentence
    Skipped,
    /// Learner quit the program
    Aborted,
}

impl QuizPhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            QuizPhase::Revealed | QuizPhase::Skipped | QuizPhase::Aborted
        )
    }
}

/// How a finished quiz ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Revealed,
    Skipped,
    Aborted,
}

impl From<Outcome> for QuizPhase {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Revealed => QuizPhase::Revealed,
            Outcome::Skipped => QuizPhase::Skipped,
            Outcome::Aborted => QuizPhase::Aborted,
        }
    }
}

/// Mutable state of one running quiz
#[derive(Clone, Debug)]
pub struct QuizState<'a> {
    sentence: &'a Sentence,
    target: Vec<char>,
    cursor: usize,
    revealed: String,
    phase: QuizPhase,
}

impl<'a> QuizState<'a> {
    pub fn new(sentence: &'a Sentence) -> Self {
        QuizState {
            sentence,
            target: sentence.target.chars().collect(),
            cursor: 0,
            revealed: String::with_capacity(sentence.target.len()),
            phase: QuizPhase::Presenting,
        }
    }

    pub fn sentence(&self) -> &'a Sentence {
        self.sentence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn set_phase(&mut self, phase: QuizPhase) {
        self.phase = phase;
    }

    /// Character under the cursor, `None` once everything is revealed
    pub fn current(&self) -> Option<char> {
        self.target.get(self.cursor).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.target.len()
    }

    /// Reveal the character under the cursor and step past it
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.revealed.push(c);
        self.cursor += 1;
        Some(c)
    }
}
