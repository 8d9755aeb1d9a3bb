//! Narrator: picks voices and runs speech off the input thread
//!
//! Background requests each get their own detached thread; nothing waits for
//! them and overlapping audio is accepted.

use super::{AudioCues, Speaker};
use crate::corpus::Sentence;
use std::sync::Arc;
use std::thread;

/// Voice settings for the two languages
#[derive(Clone, Debug, Default)]
pub struct Voices {
    /// Voice for the translation (`None` = engine default)
    pub base: Option<String>,
    /// Voice for the target sentence
    pub target: Option<String>,
    /// Speaking rate in words per minute
    pub rate: Option<u32>,
}

/// [`AudioCues`] on top of a shared [`Speaker`]
#[derive(Clone)]
pub struct Narrator {
    speaker: Arc<dyn Speaker>,
    voices: Voices,
}

impl Narrator {
    pub fn new(speaker: Arc<dyn Speaker>, voices: Voices) -> Self {
        Narrator { speaker, voices }
    }

    fn target_line(&self, sentence: &Sentence) -> (String, Option<String>) {
        (sentence.target.clone(), self.voices.target.clone())
    }

    fn translation_line(&self, sentence: &Sentence) -> (String, Option<String>) {
        (sentence.translation.clone(), self.voices.base.clone())
    }

    /// Speak `lines` in order on a detached thread
    fn spawn(&self, lines: Vec<(String, Option<String>)>) {
        let speaker = Arc::clone(&self.speaker);
        let rate = self.voices.rate;

        let spawned = thread::Builder::new()
            .name("speech".to_string())
            .spawn(move || speak_lines(speaker.as_ref(), &lines, rate));

        if let Err(e) = spawned {
            log::warn!("could not start speech thread: {}", e);
        }
    }
}

fn speak_lines(speaker: &dyn Speaker, lines: &[(String, Option<String>)], rate: Option<u32>) {
    for (text, voice) in lines {
        if let Err(e) = speaker.speak(text, voice.as_deref(), rate) {
            log::warn!("speech failed for {:?}: {}", text, e);
        }
    }
}

impl AudioCues for Narrator {
    fn announce(&self, sentence: &Sentence) {
        self.spawn(vec![
            self.target_line(sentence),
            self.translation_line(sentence),
        ]);
    }

    fn replay(&self, sentence: &Sentence) {
        self.spawn(vec![self.target_line(sentence)]);
    }
}
