//! Playback mode: show and speak sentences with no quiz

use crate::cli::display;
use crate::corpus::Sentence;
use crate::error::Result;
use crate::speech::AudioCues;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Gap after each sentence so consecutive audio does not run together
pub const SETTLE_PAUSE: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Announcing,
    Done,
}

/// Plays sentences start to finish without reading input
pub struct PlaybackMode<'a, C: AudioCues + ?Sized> {
    cues: &'a C,
    pause: Duration,
    phase: PlaybackPhase,
}

impl<'a, C: AudioCues + ?Sized> PlaybackMode<'a, C> {
    pub fn new(cues: &'a C) -> Self {
        Self::with_pause(cues, SETTLE_PAUSE)
    }

    pub fn with_pause(cues: &'a C, pause: Duration) -> Self {
        PlaybackMode {
            cues,
            pause,
            phase: PlaybackPhase::Announcing,
        }
    }

    /// Show one sentence and start speaking it in the background
    pub fn play<W: Write>(&mut self, sentence: &Sentence, out: &mut W) -> Result<()> {
        self.phase = PlaybackPhase::Announcing;
        log::debug!("sentence {}: {:?}", sentence.id, self.phase);
        display::show_sentence(out, sentence)?;
        self.cues.announce(sentence);
        self.phase = PlaybackPhase::Done;
        Ok(())
    }

    /// Play each sentence in order, pausing after each one
    pub fn play_all<'s, I, W>(&mut self, sentences: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = &'s Sentence>,
        W: Write,
    {
        for sentence in sentences {
            self.play(sentence, out)?;
            thread::sleep(self.pause);
        }
        Ok(())
    }
}
