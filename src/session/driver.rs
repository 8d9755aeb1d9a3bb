//! Driver loop: runs the chosen mode over a sequence of sentences

use super::playback::PlaybackMode;
use super::quiz::QuizSession;
use super::state::Outcome;
use crate::cli::input::KeySource;
use crate::corpus::Sentence;
use crate::error::Result;
use crate::speech::AudioCues;
use std::io::Write;

/// Whether the program should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Driver<'a, C: AudioCues + ?Sized> {
    cues: &'a C,
}

impl<'a, C: AudioCues + ?Sized> Driver<'a, C> {
    pub fn new(cues: &'a C) -> Self {
        Driver { cues }
    }

    /// Quiz each sentence in turn; a quit ends the whole run
    pub fn quiz<'s, I, K, W>(&self, sentences: I, keys: &mut K, out: &mut W) -> Result<Flow>
    where
        I: IntoIterator<Item = &'s Sentence>,
        K: KeySource + ?Sized,
        W: Write,
    {
        for sentence in sentences {
            let mut session = QuizSession::new(sentence, self.cues);
            let outcome = session.run(keys, out)?;
            debug_assert!(session.state().phase().is_terminal());
            log::info!("sentence {}: {:?}", sentence.id, outcome);

            if outcome == Outcome::Aborted {
                return Ok(Flow::Quit);
            }
            writeln!(out)?;
        }
        Ok(Flow::Continue)
    }

    /// Play each sentence with the settling pause between them
    pub fn play<'s, I, W>(&self, sentences: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = &'s Sentence>,
        W: Write,
    {
        PlaybackMode::new(self.cues).play_all(sentences, out)
    }
}
