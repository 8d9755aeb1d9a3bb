//! CLI Interface: arguments, keystrokes and terminal rendering
//!
//! # Components
//! - `args.rs`: clap arguments and mode selection
//! - `input.rs`: raw keystroke decoding
//! - `display.rs`: terminal rendering

pub mod args;
pub mod display;
pub mod input;
