//! Terminal rendering
//!
//! Features:
//! - Masked target line revealed in place
//! - Translation and spoiler lines with color coding
//! - Plain `id, target, translation` listing

use crate::corpus::Sentence;
use crate::session::quiz::is_word_char;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Write};

/// Stands in for every word character not yet revealed
pub const PLACEHOLDER: char = '_';

/// Hide word characters, keep spacing and punctuation
pub fn mask(target: &str) -> String {
    target
        .chars()
        .map(|c| if is_word_char(c) { PLACEHOLDER } else { c })
        .collect()
}

/// Translation above the masked target, cursor parked on the first character
pub fn show_prompt<W: Write>(out: &mut W, sentence: &Sentence) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print(&sentence.translation),
        ResetColor,
        Print("\n"),
        cursor::SavePosition,
        Print(mask(&sentence.target)),
        cursor::RestorePosition,
    )?;
    out.flush()
}

/// Overwrite the next placeholder with the real character
pub fn reveal<W: Write>(out: &mut W, c: char) -> io::Result<()> {
    queue!(out, SetForegroundColor(Color::Green), Print(c), ResetColor)?;
    out.flush()
}

/// Redraw the completed target
pub fn confirm<W: Write>(out: &mut W, target: &str) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveToColumn(0),
        SetAttribute(Attribute::Bold),
        Print(target),
        SetAttribute(Attribute::Reset),
        Print("\n"),
    )?;
    out.flush()
}

/// Give away the whole target on its own line
pub fn spoil<W: Write>(out: &mut W, target: &str) -> io::Result<()> {
    queue!(
        out,
        Print("\n"),
        SetForegroundColor(Color::Yellow),
        Print(target),
        ResetColor,
        Print("\n"),
    )?;
    out.flush()
}

/// Target and translation, nothing hidden
pub fn show_sentence<W: Write>(out: &mut W, sentence: &Sentence) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Cyan),
        Print(format!("{:>3} ", sentence.id)),
        ResetColor,
        Print(&sentence.target),
        Print("\n    "),
        SetForegroundColor(Color::DarkGrey),
        Print(&sentence.translation),
        ResetColor,
        Print("\n"),
    )?;
    out.flush()
}

/// One listing line
pub fn list_line<W: Write>(out: &mut W, sentence: &Sentence) -> io::Result<()> {
    writeln!(
        out,
        "{}, {}, {}",
        sentence.id, sentence.target, sentence.translation
    )
}

/// Key help shown once before quizzing
pub fn show_help<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::DarkGrey),
        Print("Type the sentence  |  Backspace: reveal letter  |  Ctrl+S: replay  |  Ctrl+N: next  |  Ctrl+C: quit\n\n"),
        ResetColor
    )?;
    out.flush()
}
