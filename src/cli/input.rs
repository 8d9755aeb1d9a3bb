//! Keystroke input: raw terminal bytes to key events
//!
//! Features:
//! - Fixed control-key table (Ctrl+C, Backspace, Ctrl+N, Ctrl+S)
//! - Unicode character support (multi-byte UTF-8)
//! - Terminal escape sequences swallowed whole
//! - Raw mode held only for the duration of a read

use crossterm::terminal;
use crossterm::tty::IsTty;
use std::io::{self, Read};

/// Interrupt (Ctrl+C)
const QUIT: u8 = 0x03;
/// Backspace (Ctrl+H)
const BACKSPACE: u8 = 0x08;
/// DEL, sent by most terminals for the Backspace key
const DELETE: u8 = 0x7F;
/// Ctrl+N
const NEXT: u8 = 0x0E;
/// Ctrl+S
const REPLAY: u8 = 0x13;
const ESC: u8 = 0x1B;

/// Save-cursor signal written around the masked line; never learner input
pub const SAVE_CURSOR: &[u8] = b"\x1b7";
/// Restore-cursor signal written around the masked line; never learner input
pub const RESTORE_CURSOR: &[u8] = b"\x1b8";

/// What a single keystroke means to the quiz
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    /// Leave the program
    Quit,
    /// Give up on this sentence and move to the next one
    NextSentence,
    /// Speak the target sentence again
    ReplayAudio,
    /// Reveal the current character without typing it
    SkipChar,
    /// A printable character
    Char(char),
    /// Anything else; ignored
    Other,
}

/// Decode the first key in `buf`.
///
/// Returns the event and how many bytes it used, or `None` when `buf` is
/// empty or ends in the middle of a UTF-8 character.
pub fn decode(buf: &[u8]) -> Option<(KeyEvent, usize)> {
    let &first = buf.first()?;

    let decoded = match first {
        QUIT => (KeyEvent::Quit, 1),
        BACKSPACE | DELETE => (KeyEvent::SkipChar, 1),
        NEXT => (KeyEvent::NextSentence, 1),
        REPLAY => (KeyEvent::ReplayAudio, 1),
        ESC => (KeyEvent::Other, escape_len(buf)?),
        0x00..=0x1F => (KeyEvent::Other, 1),
        _ => return decode_char(buf),
    };
    Some(decoded)
}

/// Length of the escape sequence at the start of `buf` (which begins with ESC),
/// or `None` while the sequence is still incomplete
fn escape_len(buf: &[u8]) -> Option<usize> {
    if buf.starts_with(SAVE_CURSOR) || buf.starts_with(RESTORE_CURSOR) {
        return Some(2);
    }

    match buf.get(1)? {
        // CSI: parameters until a final byte in 0x40..=0x7E
        b'[' => buf[2..]
            .iter()
            .position(|b| (0x40..=0x7E).contains(b))
            .map(|pos| pos + 3),
        // SS3: one more byte
        b'O' => (buf.len() >= 3).then_some(3),
        // Alt+key
        _ => Some(2),
    }
}

fn decode_char(buf: &[u8]) -> Option<(KeyEvent, usize)> {
    let width = match buf[0] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => return Some((KeyEvent::Other, 1)),
    };
    if buf.len() < width {
        return None;
    }

    let event = match std::str::from_utf8(&buf[..width]) {
        Ok(s) => match s.chars().next() {
            Some(c) if !c.is_control() => KeyEvent::Char(c),
            _ => KeyEvent::Other,
        },
        Err(_) => return Some((KeyEvent::Other, 1)),
    };
    Some((event, width))
}

/// Anything that hands out key events one at a time
pub trait KeySource {
    /// Block until the next key; `None` once input is exhausted
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>>;
}

/// Puts the terminal in raw mode and restores it when dropped
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Best effort restore
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads key events from a byte stream
pub struct KeyReader<R> {
    source: R,
    /// Bytes read but not yet decoded
    pending: Vec<u8>,
    /// Switch the terminal to raw mode around each read
    raw: bool,
}

impl KeyReader<io::Stdin> {
    /// Keys from standard input; raw mode only if it is a terminal
    pub fn stdin() -> Self {
        let stdin = io::stdin();
        let raw = stdin.is_tty();
        KeyReader::new(stdin, raw)
    }
}

impl<R: Read> KeyReader<R> {
    pub fn new(source: R, raw: bool) -> Self {
        KeyReader {
            source,
            pending: Vec::new(),
            raw,
        }
    }

    fn fill(&mut self) -> io::Result<usize> {
        let mut chunk = [0u8; 64];
        let n = loop {
            let _guard = if self.raw {
                Some(RawModeGuard::acquire()?)
            } else {
                None
            };
            match self.source.read(&mut chunk) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.pending.extend_from_slice(&chunk[..n]);
        Ok(n)
    }
}

impl<R: Read> KeySource for KeyReader<R> {
    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        loop {
            if let Some((event, used)) = decode(&self.pending) {
                self.pending.drain(..used);
                return Ok(Some(event));
            }
            if self.fill()? == 0 {
                // a dangling partial character or escape is dropped
                self.pending.clear();
                return Ok(None);
            }
        }
    }
}
