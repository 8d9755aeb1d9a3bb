//! Test doubles for the terminal and the speech engine

use crate::cli::input::{KeyEvent, KeySource};
use crate::corpus::Sentence;
use crate::speech::AudioCues;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

/// Keys fed from a fixed script; runs dry like exhausted stdin
pub struct Scripted(pub VecDeque<KeyEvent>);

impl Scripted {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Scripted(keys.into_iter().collect())
    }

    pub fn typing(text: &str) -> Self {
        Self::new(text.chars().map(KeyEvent::Char))
    }
}

impl KeySource for Scripted {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        Ok(self.0.pop_front())
    }
}

/// Records which cues were requested instead of speaking
#[derive(Default)]
pub struct RecordingCues {
    pub calls: RefCell<Vec<String>>,
}

impl AudioCues for RecordingCues {
    fn announce(&self, sentence: &Sentence) {
        self.calls.borrow_mut().push(format!("announce {}", sentence.id));
    }

    fn replay(&self, sentence: &Sentence) {
        self.calls.borrow_mut().push(format!("replay {}", sentence.id));
    }
}
