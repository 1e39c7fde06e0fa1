//! `bookmatch interactive` command
//!
//! Answers one title per stdin line against a single build. EOF ends the
//! session. Ctrl-C while waiting for input exits at once with status 130;
//! Ctrl-C during an answer ends the session once that answer is printed, and a
//! second one exits at once.

use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bookmatch_core::error::{BookmatchError, Result};
use bookmatch_core::{EngineState, RecommendOptions};
use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::commands::recommend;

/// Exit status after an interrupt
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Interrupt state shared between the read loop and the signal handler
#[derive(Debug, Default)]
struct Session {
    interrupted: AtomicBool,
    answering: AtomicBool,
}

impl Session {
    /// Record an interrupt; true when the process should exit right away
    fn interrupt(&self) -> bool {
        let already = self.interrupted.swap(true, Ordering::SeqCst);
        already || !self.answering.load(Ordering::SeqCst)
    }

    fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }
}

/// Answer titles read from stdin
pub fn execute(cli: &Cli, engine: &EngineState, options: &RecommendOptions) -> Result<()> {
    let session = Arc::new(Session::default());
    let handler_session = Arc::clone(&session);

    ctrlc::set_handler(move || {
        if handler_session.interrupt() {
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    })
    .map_err(|e| BookmatchError::FailedOperation {
        operation: "install interrupt handler".to_string(),
        reason: e.to_string(),
    })?;

    let stdin = io::stdin();
    let prompt = stdin.is_terminal() && !cli.quiet;
    if prompt {
        eprintln!(
            "{} books loaded. Enter a title per line, Ctrl-D to quit.",
            engine.len()
        );
    }

    run_loop(cli, engine, options, stdin.lock(), prompt, &session)?;
    Ok(())
}

/// Read-answer loop; returns the number of titles answered
fn run_loop(
    cli: &Cli,
    engine: &EngineState,
    options: &RecommendOptions,
    mut input: impl BufRead,
    prompt: bool,
    session: &Session,
) -> Result<usize> {
    let mut line = String::new();
    let mut answered = 0usize;

    loop {
        if session.is_interrupted() {
            debug!(answered, "interactive_interrupted");
            break;
        }
        if prompt {
            eprint!("> ");
            io::stderr().flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let title = line.trim();
        if title.is_empty() {
            continue;
        }

        session.answering.store(true, Ordering::SeqCst);
        if answered > 0 && cli.format == OutputFormat::Human {
            println!();
        }
        let results = engine.recommend_with(title, options);
        let printed = recommend::output(cli, title, &results);
        session.answering.store(false, Ordering::SeqCst);
        printed?;
        answered += 1;
    }

    debug!(answered, "interactive_done");
    Ok(answered)
}
