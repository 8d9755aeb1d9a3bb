//! Speech: reading sentences aloud
//!
//! # Components
//! - `say.rs`: `Speaker` adapter that shells out to an OS speech utility
//! - `narrator.rs`: voice selection and fire-and-forget background playback

pub mod narrator;
pub mod say;

pub use narrator::{Narrator, Voices};
pub use say::SayCommand;

use crate::corpus::Sentence;
use crate::error::Result;

/// Something that can turn text into audible speech.
///
/// `speak` blocks until playback finishes. Callers that must not block run
/// it on a background thread (see [`Narrator`]).
pub trait Speaker: Send + Sync {
    /// Speak `text`, optionally with a specific voice and rate (words per minute)
    fn speak(&self, text: &str, voice: Option<&str>, rate: Option<u32>) -> Result<()>;

    /// Check once, up front, whether the engine can be used at all
    fn probe(&self) -> bool;
}

/// Audio cues the quiz and playback modes ask for.
pub trait AudioCues {
    /// Target then translation, in the background
    fn announce(&self, sentence: &Sentence);
    /// Target only, in the background
    fn replay(&self, sentence: &Sentence);
}
