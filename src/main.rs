//! Sentence Drill - listen-and-type sentence practice
//!
//! Single-process, stateless CLI application.
//! Shows a translation, speaks the sentence, and reveals it as it is typed.

mod cli;
mod corpus;
mod error;
mod session;
mod speech;

use clap::Parser;
use cli::args::{Args, Mode, Selection};
use cli::display;
use cli::input::KeyReader;
use corpus::{Corpus, Sentence, SentenceStore};
use error::{DrillError, Result};
use session::{Driver, Flow};
use speech::{Narrator, SayCommand, Speaker, Voices};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(args) {
        Ok(()) | Err(DrillError::BrokenOutput) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sentence-drill: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let say = SayCommand::new(&args.speech_program, Some(args.target_voice.clone()));
    if !say.probe() {
        return Err(DrillError::SpeechUnavailable(format!(
            "cannot run `{}` with voice {:?}",
            args.speech_program, args.target_voice
        )));
    }

    let mode = args.mode()?;
    let store = match &args.corpus {
        Some(path) => Corpus::load(path)?,
        None => Corpus::embedded(),
    };
    log::info!("{} sentences loaded, mode {:?}", store.len(), mode);

    let speaker: Arc<dyn Speaker> = Arc::new(say);
    let narrator = Narrator::new(
        speaker,
        Voices {
            base: args.voice.clone(),
            target: Some(args.target_voice.clone()),
            rate: args.rate,
        },
    );
    let driver = Driver::new(&narrator);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::List => {
            for sentence in store.iter() {
                display::list_line(&mut out, sentence)?;
            }
            out.flush()?;
        }
        Mode::Play(selection) => {
            let sentences = select(&store, &selection)?;
            driver.play(sentences, &mut out)?;
        }
        Mode::Test(selection) => {
            let sentences = select(&store, &selection)?;
            quiz(&driver, sentences, &mut out)?;
        }
        Mode::Number(id) => {
            let sentence = store.get(id)?;
            quiz(&driver, vec![sentence], &mut out)?;
        }
        Mode::Random(range) => {
            let mut rng = rand::thread_rng();
            let sentence = match range {
                Some(range) => store.sample_in(range, &mut rng)?,
                None => store.sample(&mut rng)?,
            };
            quiz(&driver, vec![sentence], &mut out)?;
        }
    }

    Ok(())
}

fn select<'s>(store: &'s SentenceStore, selection: &Selection) -> Result<Vec<&'s Sentence>> {
    Ok(match selection {
        Selection::All => store.iter().collect(),
        Selection::One(id) => vec![store.get(*id)?],
        Selection::Range(range) => store.range(range.clone()),
    })
}

fn quiz<W: Write>(driver: &Driver<'_, Narrator>, sentences: Vec<&Sentence>, out: &mut W) -> Result<()> {
    display::show_help(out)?;
    let mut keys = KeyReader::stdin();

    if driver.quiz(sentences, &mut keys, out)? == Flow::Quit {
        log::info!("quit requested");
    }
    Ok(())
}
