//! Command-line arguments and mode selection
//!
//! Mode flags share one value grammar: a bare flag means `true`, `N` is a
//! number, `A-B` an inclusive range, anything else is kept as text. Each mode
//! then accepts only the shapes that make sense for it.

use crate::error::{DrillError, Result};
use clap::Parser;
use std::ops::RangeInclusive;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sentence-drill")]
#[command(about = "Listen to a sentence, then type it back letter by letter")]
pub struct Args {
    /// Print every sentence as `id, target, translation`
    #[arg(long)]
    pub list: bool,

    /// Play sentence N, sentences A-B, or all sentences, without quizzing
    #[arg(long, value_name = "N|A-B", num_args = 0..=1, default_missing_value = "true", value_parser = Selector::parse)]
    pub play: Option<Selector>,

    /// Quiz every sentence in order, or only ids A-B
    #[arg(long, value_name = "A-B", num_args = 0..=1, default_missing_value = "true", value_parser = Selector::parse)]
    pub test: Option<Selector>,

    /// Quiz exactly sentence N
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "true", value_parser = Selector::parse)]
    pub number: Option<Selector>,

    /// Quiz one random sentence, optionally drawn from ids A-B
    #[arg(long, value_name = "A-B", num_args = 0..=1, default_missing_value = "true", value_parser = Selector::parse)]
    pub random: Option<Selector>,

    /// Corpus file of alternating target/translation lines
    #[arg(long, env = "DRILL_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Voice for the translation (engine default if unset)
    #[arg(long, env = "DRILL_VOICE")]
    pub voice: Option<String>,

    /// Voice for the target sentence
    #[arg(long, env = "DRILL_TARGET_VOICE", default_value = "Samantha")]
    pub target_voice: String,

    /// Speaking rate in words per minute
    #[arg(long, env = "DRILL_RATE")]
    pub rate: Option<u32>,

    /// Speech program to invoke
    #[arg(long, env = "DRILL_SPEECH_PROGRAM", default_value = "say")]
    pub speech_program: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// A parsed flag value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Flag given without a value
    Flag,
    Number(u32),
    Range(RangeInclusive<u32>),
    Text(String),
}

impl Selector {
    /// Never fails: values outside the grammar are kept as text
    pub fn parse(value: &str) -> std::result::Result<Self, String> {
        if value == "true" {
            return Ok(Selector::Flag);
        }
        if let Some(n) = parse_digits(value) {
            return Ok(Selector::Number(n));
        }
        if let Some((a, b)) = value.split_once('-') {
            if let (Some(a), Some(b)) = (parse_digits(a), parse_digits(b)) {
                return Ok(Selector::Range(a..=b));
            }
        }
        Ok(Selector::Text(value.to_string()))
    }

    fn describe(&self) -> String {
        match self {
            Selector::Flag => "true".to_string(),
            Selector::Number(n) => n.to_string(),
            Selector::Range(r) => format!("{}-{}", r.start(), r.end()),
            Selector::Text(s) => s.clone(),
        }
    }

    fn invalid(&self, flag: &'static str) -> DrillError {
        DrillError::InvalidArgument {
            flag,
            value: self.describe(),
        }
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Which sentences a mode works on
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    All,
    One(u32),
    Range(RangeInclusive<u32>),
}

/// What the program was asked to do
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    List,
    Play(Selection),
    Test(Selection),
    Number(u32),
    Random(Option<RangeInclusive<u32>>),
}

impl Args {
    /// Resolve the mode flags; the first one given wins, in declaration order
    pub fn mode(&self) -> Result<Mode> {
        if self.list {
            return Ok(Mode::List);
        }

        if let Some(sel) = &self.play {
            return match sel {
                Selector::Flag => Ok(Mode::Play(Selection::All)),
                Selector::Number(n) => Ok(Mode::Play(Selection::One(*n))),
                Selector::Range(r) => Ok(Mode::Play(Selection::Range(r.clone()))),
                Selector::Text(_) => Err(sel.invalid("play")),
            };
        }

        if let Some(sel) = &self.test {
            return match sel {
                Selector::Flag => Ok(Mode::Test(Selection::All)),
                Selector::Range(r) => Ok(Mode::Test(Selection::Range(r.clone()))),
                _ => Err(sel.invalid("test")),
            };
        }

        if let Some(sel) = &self.number {
            return match sel {
                Selector::Number(n) => Ok(Mode::Number(*n)),
                _ => Err(sel.invalid("number")),
            };
        }

        match &self.random {
            None | Some(Selector::Flag) => Ok(Mode::Random(None)),
            Some(Selector::Range(r)) => Ok(Mode::Random(Some(r.clone()))),
            Some(sel) => Err(sel.invalid("random")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        let mut full = vec!["sentence-drill"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_value_grammar() {
        assert_eq!(Selector::parse("true"), Ok(Selector::Flag));
        assert_eq!(Selector::parse("12"), Ok(Selector::Number(12)));
        assert_eq!(Selector::parse("3-5"), Ok(Selector::Range(3..=5)));
        assert_eq!(Selector::parse("3-"), Ok(Selector::Text("3-".to_string())));
        assert_eq!(Selector::parse("-5"), Ok(Selector::Text("-5".to_string())));
        assert_eq!(Selector::parse("abc"), Ok(Selector::Text("abc".to_string())));
        assert_eq!(Selector::parse("+7"), Ok(Selector::Text("+7".to_string())));
    }

    #[test]
    fn test_default_mode_is_random_quiz() {
        assert_eq!(args(&[]).mode().unwrap(), Mode::Random(None));
    }

    #[test]
    fn test_bare_flags() {
        assert_eq!(args(&["--play"]).mode().unwrap(), Mode::Play(Selection::All));
        assert_eq!(args(&["--test"]).mode().unwrap(), Mode::Test(Selection::All));
        assert_eq!(args(&["--random"]).mode().unwrap(), Mode::Random(None));
        assert_eq!(args(&["--list"]).mode().unwrap(), Mode::List);
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(
            args(&["--play", "3-5"]).mode().unwrap(),
            Mode::Play(Selection::Range(3..=5))
        );
        assert_eq!(
            args(&["--play", "4"]).mode().unwrap(),
            Mode::Play(Selection::One(4))
        );
        assert_eq!(
            args(&["--test", "10-20"]).mode().unwrap(),
            Mode::Test(Selection::Range(10..=20))
        );
        assert_eq!(args(&["--number", "42"]).mode().unwrap(), Mode::Number(42));
        assert_eq!(
            args(&["--random", "1-9"]).mode().unwrap(),
            Mode::Random(Some(1..=9))
        );
    }

    #[test]
    fn test_precedence() {
        assert_eq!(args(&["--number", "2", "--list"]).mode().unwrap(), Mode::List);
        assert_eq!(
            args(&["--random", "--play", "1"]).mode().unwrap(),
            Mode::Play(Selection::One(1))
        );
        assert_eq!(
            args(&["--random", "--number", "8"]).mode().unwrap(),
            Mode::Number(8)
        );
    }

    #[test]
    fn test_invalid_arguments() {
        match args(&["--number", "two"]).mode() {
            Err(DrillError::InvalidArgument { flag, value }) => {
                assert_eq!(flag, "number");
                assert_eq!(value, "two");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        match args(&["--number"]).mode() {
            Err(DrillError::InvalidArgument { flag, value }) => {
                assert_eq!(flag, "number");
                assert_eq!(value, "true");
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        assert!(matches!(
            args(&["--random", "5"]).mode(),
            Err(DrillError::InvalidArgument { flag: "random", .. })
        ));
        assert!(matches!(
            args(&["--number", "1-3"]).mode(),
            Err(DrillError::InvalidArgument { flag: "number", .. })
        ));
        assert!(matches!(
            args(&["--play", "all"]).mode(),
            Err(DrillError::InvalidArgument { flag: "play", .. })
        ));
    }

    #[test]
    fn test_speech_settings() {
        let parsed = args(&["--target-voice", "Daniel", "--rate", "160"]);
        assert_eq!(parsed.target_voice, "Daniel");
        assert_eq!(parsed.rate, Some(160));
        assert_eq!(parsed.speech_program, "say");
    }
}
