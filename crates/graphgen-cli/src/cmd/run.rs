//! Session entry points: the interactive shell and `graphgen run <FILE|->`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::console::Console;
use crate::shell::Session;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script to execute, one command per line; `-` reads stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// How the graph and config for a session are built.
pub struct SessionSetup {
    pub graph: graphgen_core::Graph,
    pub config: graphgen_core::config::GraphgenConfig,
    pub mode: crate::output::OutputMode,
    pub color: bool,
}

fn open_script(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

/// Run a script without prompt or banner.
///
/// Returns the number of lines that reported an error.
///
/// # Errors
///
/// Returns an error if the script cannot be opened, on console I/O
/// failure, or on a fatal graph error.
pub fn run_script(args: &RunArgs, setup: SessionSetup) -> Result<usize> {
    let mut input = open_script(&args.file)?;
    let (stdout, stderr) = (io::stdout(), io::stderr());
    let (mut out, mut err) = (stdout.lock(), stderr.lock());
    let console = Console::new(&mut *input, &mut out, &mut err).with_color(
        setup.color && stdout.is_terminal(),
        setup.color && stderr.is_terminal(),
    );

    let mut session = Session::new(setup.graph, console, setup.config, setup.mode);
    session.run_loop(false)?;
    let errors = session.console.errors();
    debug!(script = %args.file.display(), errors, "script finished");
    Ok(errors)
}

/// Run the interactive shell on stdin.
///
/// # Errors
///
/// Returns an error on console I/O failure or a fatal graph error.
pub fn run_shell(setup: SessionSetup) -> Result<()> {
    let (stdin, stdout, stderr) = (io::stdin(), io::stdout(), io::stderr());
    let (mut input, mut out, mut err) = (stdin.lock(), stdout.lock(), stderr.lock());
    let console = Console::new(&mut input, &mut out, &mut err).with_color(
        setup.color && stdout.is_terminal(),
        setup.color && stderr.is_terminal(),
    );

    let mut session = Session::new(setup.graph, console, setup.config, setup.mode);
    session.run_loop(true)
}
