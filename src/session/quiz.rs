//! Quiz session: reveal a sentence as the learner types it
//!
//! The target starts fully masked. Word characters must be typed (case does
//! not matter); everything else is revealed on its own. Wrong keys are
//! simply ignored, so a quiz can only end by finishing, skipping or quitting.

use super::state::{Outcome, QuizPhase, QuizState};
use crate::cli::display;
use crate::cli::input::{KeyEvent, KeySource};
use crate::corpus::Sentence;
use crate::error::Result;
use crate::speech::AudioCues;
use std::io::Write;

/// Letters, digits and underscore: the characters a learner has to type
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive comparison using full Unicode lowercase mapping
pub fn chars_match(typed: char, expected: char) -> bool {
    typed == expected || typed.to_lowercase().eq(expected.to_lowercase())
}

/// One sentence, from masked prompt to outcome
pub struct QuizSession<'a, C: AudioCues + ?Sized> {
    state: QuizState<'a>,
    cues: &'a C,
}

impl<'a, C: AudioCues + ?Sized> QuizSession<'a, C> {
    pub fn new(sentence: &'a Sentence, cues: &'a C) -> Self {
        QuizSession {
            state: QuizState::new(sentence),
            cues,
        }
    }

    pub fn state(&self) -> &QuizState<'a> {
        &self.state
    }

    /// Show the prompt, start the audio and process keys until the quiz ends.
    ///
    /// Running out of keys counts as quitting.
    pub fn run<K, W>(&mut self, keys: &mut K, out: &mut W) -> Result<Outcome>
    where
        K: KeySource + ?Sized,
        W: Write,
    {
        let sentence = self.state.sentence();
        display::show_prompt(out, sentence)?;
        self.cues.announce(sentence);
        self.state.set_phase(QuizPhase::AwaitingMatch);

        loop {
            if let Some(outcome) = self.settle(out)? {
                return Ok(outcome);
            }
            let key = keys.next_key()?.unwrap_or(KeyEvent::Quit);
            if let Some(outcome) = self.handle(key, out)? {
                return Ok(outcome);
            }
        }
    }

    /// Reveal punctuation and spacing under the cursor; finish if nothing is left
    fn settle<W: Write>(&mut self, out: &mut W) -> Result<Option<Outcome>> {
        while !self.state.is_complete() {
            match self.state.current() {
                Some(c) if !is_word_char(c) => self.reveal_current(out)?,
                _ => return Ok(None),
            }
        }

        display::confirm(out, &self.state.sentence().target)?;
        Ok(Some(self.finish(Outcome::Revealed)))
    }

    /// Apply one key while a word character is awaited
    fn handle<W: Write>(&mut self, key: KeyEvent, out: &mut W) -> Result<Option<Outcome>> {
        let target = &self.state.sentence().target;

        match key {
            KeyEvent::Quit => {
                display::spoil(out, target)?;
                return Ok(Some(self.finish(Outcome::Aborted)));
            }
            KeyEvent::NextSentence => {
                display::spoil(out, target)?;
                return Ok(Some(self.finish(Outcome::Skipped)));
            }
            KeyEvent::ReplayAudio => self.cues.replay(self.state.sentence()),
            KeyEvent::SkipChar => self.reveal_current(out)?,
            KeyEvent::Char(typed) => {
                if self.state.current().is_some_and(|c| chars_match(typed, c)) {
                    self.reveal_current(out)?;
                }
            }
            KeyEvent::Other => {}
        }
        Ok(None)
    }

    fn reveal_current<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if let Some(c) = self.state.advance() {
            display::reveal(out, c)?;
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.state.set_phase(outcome.into());
        log::debug!(
            "sentence {} ended {:?} at {}/{}: {:?}",
            self.state.sentence().id,
            outcome,
            self.state.cursor(),
            self.state.sentence().target.chars().count(),
            self.state.revealed()
        );
        outcome
    }
}
