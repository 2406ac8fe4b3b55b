//! The line-oriented command interpreter shared by `graphgen shell` and
//! `graphgen run`.
//!
//! # Overview
//!
//! A [`Session`] bundles the graph, the console streams, the loaded config
//! and the output mode. Each input line is split on whitespace and parsed
//! with a multicall clap parser, so the first word names the command.
//!
//! Recoverable problems (bad input, invalid indices) are written as `E:`
//! lines and the loop continues. Errors that [`GraphError::is_fatal`]
//! classifies as fatal, and I/O failures on the console, end the session
//! and propagate to the caller.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use graphgen_core::GraphError;
use graphgen_core::config::GraphgenConfig;
use graphgen_core::Graph;
use tracing::{Level, debug};

use crate::cmd;
use crate::console::Console;
use crate::output::OutputMode;

const BANNER: &str = "------------------------\nSimple Graph Generator\n------------------------";

/// Everything a command handler may touch.
pub struct Session<'io> {
    pub graph: Graph,
    pub console: Console<'io>,
    pub config: GraphgenConfig,
    pub mode: OutputMode,
}

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Add a vertex pointing at the given vertices.
    Add(cmd::add::AddArgs),
    /// Add or delete the arc from A to B.
    Arch(cmd::arch::ArchArgs),
    /// Clear the screen.
    Cls,
    /// Delete vertices, renumbering the rest of the graph.
    Del(cmd::del::DelArgs),
    /// Leave the shell.
    #[command(visible_aliases = ["quit", "q"])]
    Exit,
    /// Look for an arc from A to B.
    Find(cmd::find::FindArgs),
    /// Show command help.
    Help,
    /// Print the graph.
    List(cmd::list::ListArgs),
    /// Replace the graph with an empty one.
    New(cmd::new::NewArgs),
    /// Replace the arcs of one vertex.
    Set(cmd::set::SetArgs),
    /// Grow or shrink the graph to n vertices.
    Size(cmd::size::SizeArgs),
    /// Print graph statistics.
    Tell,
}

impl ShellCommand {
    const fn is_mutating(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Arch(_) | Self::Del(_) | Self::New(_) | Self::Set(_) | Self::Size(_)
        )
    }
}

/// Whether `name` is a shell command or one of its aliases.
fn is_known_command(name: &str) -> bool {
    ShellLine::command()
        .get_subcommands()
        .any(|c| c.get_name() == name || c.get_all_aliases().any(|alias| alias == name))
}

/// Capitalize the first letter and end with a period.
fn sentence(msg: &str) -> String {
    let mut chars = msg.chars();
    let mut out: String = chars
        .next()
        .map(|c| c.to_uppercase().chain(chars).collect())
        .unwrap_or_default();
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}

impl<'io> Session<'io> {
    pub const fn new(
        graph: Graph,
        console: Console<'io>,
        config: GraphgenConfig,
        mode: OutputMode,
    ) -> Self {
        Self {
            graph,
            console,
            config,
            mode,
        }
    }

    /// Read and execute lines until `exit` or end of input.
    ///
    /// Interactive sessions print the banner and prompt.
    ///
    /// # Errors
    ///
    /// Returns fatal graph errors and console I/O failures.
    pub fn run_loop(&mut self, interactive: bool) -> Result<()> {
        if interactive && self.config.shell.banner {
            writeln!(self.console.out(), "{BANNER}")?;
        }

        loop {
            let prompt = interactive.then(|| self.config.shell.prompt.clone());
            let Some(line) = self.console.read_line(prompt.as_deref())? else {
                if interactive {
                    writeln!(self.console.out())?;
                }
                break;
            };
            if self.execute_line(&line)? == Flow::Exit {
                break;
            }
        }

        self.console.flush()?;
        Ok(())
    }

    /// Execute one command line.
    ///
    /// # Errors
    ///
    /// Returns fatal graph errors and console I/O failures. Everything else
    /// is reported on the console.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&name) = tokens.first() else {
            return Ok(Flow::Continue);
        };

        if !is_known_command(name) {
            self.console.error("Unknown command. Check 'help'.")?;
            return Ok(Flow::Continue);
        }

        let parsed = match ShellLine::try_parse_from(tokens.iter().copied()) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.report_parse_error(&err)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(command = name, args = tokens.len() - 1, "dispatch");
        let mutating = parsed.command.is_mutating();

        match self.dispatch(parsed.command) {
            Ok(flow) => {
                if mutating {
                    self.verify()?;
                }
                Ok(flow)
            }
            Err(err) => match err.downcast_ref::<GraphError>() {
                Some(GraphError::InvalidArgument(msg)) => {
                    self.console.error(&sentence(msg))?;
                    Ok(Flow::Continue)
                }
                _ => Err(err),
            },
        }
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        match command {
            ShellCommand::Add(args) => cmd::add::run_add(self, &args)?,
            ShellCommand::Arch(args) => cmd::arch::run_arch(self, &args)?,
            ShellCommand::Cls => self.console.clear_screen()?,
            ShellCommand::Del(args) => cmd::del::run_del(self, &args)?,
            ShellCommand::Exit => return Ok(Flow::Exit),
            ShellCommand::Find(args) => cmd::find::run_find(self, &args)?,
            ShellCommand::Help => cmd::help::run_help(self)?,
            ShellCommand::List(args) => cmd::list::run_list(self, &args)?,
            ShellCommand::New(args) => cmd::new::run_new(self, &args)?,
            ShellCommand::Set(args) => cmd::set::run_set(self, &args)?,
            ShellCommand::Size(args) => cmd::size::run_size(self, &args)?,
            ShellCommand::Tell => cmd::tell::run_tell(self)?,
        }
        Ok(Flow::Continue)
    }

    fn report_parse_error(&mut self, err: &clap::Error) -> Result<()> {
        use clap::error::ErrorKind;

        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            write!(self.console.out(), "{}", err.render())?;
            return Ok(());
        }

        let rendered = err.render().to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let msg = first.strip_prefix("error: ").unwrap_or(first);
        self.console.error(&sentence(msg))?;
        Ok(())
    }

    /// Re-check store invariants after a mutation when debug logging is on.
    fn verify(&self) -> Result<()> {
        if tracing::enabled!(Level::DEBUG) {
            self.graph.check_invariants()?;
            debug!(
                len = self.graph.len(),
                capacity = self.graph.capacity(),
                arcs = self.graph.arc_count(),
                "invariants hold"
            );
        }
        Ok(())
    }
}
