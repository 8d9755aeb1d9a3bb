//! Session Management: quizzing and playing sentences
//!
//! # Components
//! - `state.rs`: QuizState and the quiz lifecycle
//! - `quiz.rs`: QuizSession, the keystroke-by-keystroke reveal
//! - `playback.rs`: PlaybackMode, speak without quizzing
//! - `driver.rs`: Driver loop over a sequence of sentences

pub mod driver;
pub mod playback;
pub mod quiz;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use driver::{Driver, Flow};
