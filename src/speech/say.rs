//! OS speech utility adapter
//!
//! Invokes a `say`-compatible program: `PROGRAM [-v VOICE] [-r RATE] TEXT`,
//! with `PROGRAM -v ?` listing the installed voices.

use super::Speaker;
use crate::error::{DrillError, Result};
use std::process::{Command, Stdio};

/// Speaker backed by an external speech program
#[derive(Clone, Debug)]
pub struct SayCommand {
    /// Program to run (looked up on PATH)
    program: String,
    /// Voice that must be installed for the probe to pass
    required_voice: Option<String>,
}

impl SayCommand {
    pub fn new(program: impl Into<String>, required_voice: Option<String>) -> Self {
        SayCommand {
            program: program.into(),
            required_voice,
        }
    }

    fn unavailable(&self, detail: impl std::fmt::Display) -> DrillError {
        DrillError::SpeechUnavailable(format!("{}: {}", self.program, detail))
    }
}

/// Whether a `-v ?` listing contains `voice` as a voice name
pub fn voice_listed(listing: &str, voice: &str) -> bool {
    listing.lines().any(|line| {
        line.strip_prefix(voice)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
    })
}

impl Speaker for SayCommand {
    fn speak(&self, text: &str, voice: Option<&str>, rate: Option<u32>) -> Result<()> {
        let mut cmd = Command::new(&self.program);
        if let Some(voice) = voice {
            cmd.arg("-v").arg(voice);
        }
        if let Some(rate) = rate {
            cmd.arg("-r").arg(rate.to_string());
        }
        cmd.arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let status = cmd.status().map_err(|e| self.unavailable(e))?;
        if !status.success() {
            return Err(self.unavailable(status));
        }
        Ok(())
    }

    fn probe(&self) -> bool {
        let output = match Command::new(&self.program)
            .args(["-v", "?"])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                log::debug!("speech probe: cannot run {}: {}", self.program, e);
                return false;
            }
        };

        if !output.status.success() {
            log::debug!("speech probe: {} exited with {}", self.program, output.status);
            return false;
        }

        match &self.required_voice {
            Some(voice) => {
                let found = voice_listed(&String::from_utf8_lossy(&output.stdout), voice);
                if !found {
                    log::debug!("speech probe: voice {:?} not installed", voice);
                }
                found
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "\
Alex                en_US    # Most people recognize me by my voice.
Bad News            en_US    # The light you see at the end of the tunnel.
Samantha            en_US    # Hello, my name is Samantha.
";

    #[test]
    fn test_voice_listed() {
        assert!(voice_listed(LISTING, "Samantha"));
        assert!(voice_listed(LISTING, "Bad News"));
        assert!(!voice_listed(LISTING, "Sam"));
        assert!(!voice_listed(LISTING, "Lesya"));
    }

    #[test]
    fn test_missing_program_fails_probe_and_speak() {
        let say = SayCommand::new("/nonexistent/say-binary", None);
        assert!(!say.probe());
        assert!(matches!(
            say.speak("hello", None, None),
            Err(DrillError::SpeechUnavailable(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_decides_speak_result() {
        assert!(SayCommand::new("true", None)
            .speak("hello", Some("Alex"), Some(180))
            .is_ok());
        assert!(matches!(
            SayCommand::new("false", None).speak("hello", None, None),
            Err(DrillError::SpeechUnavailable(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_probe_requires_voice_in_listing() {
        // `true` prints nothing, so no voice can be listed
        assert!(SayCommand::new("true", None).probe());
        assert!(!SayCommand::new("true", Some("Samantha".to_string())).probe());
    }
}
