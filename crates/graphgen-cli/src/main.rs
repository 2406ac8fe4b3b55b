#![forbid(unsafe_code)]

mod cmd;
mod console;
mod output;
mod shell;

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use cmd::run::SessionSetup;
use graphgen_core::config::{GraphgenConfig, load_config};
use graphgen_core::{ErrorCode, Graph, GraphError};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "graphgen: interactive directed-graph generator",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for reports (`list`, `tell`, `find`).
    #[arg(long, value_enum, global = true)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true)]
    json: bool,

    /// Read configuration from this file instead of the user config.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Vertex slots to preallocate (overrides `graph.default_capacity`).
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..))]
    capacity: Option<u16>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Start the interactive shell",
        long_about = "Start the interactive shell. This is the default when no command is given.",
        after_help = "EXAMPLES:\n    # Start with the default graph\n    graphgen\n\n    # Start with room for 1024 vertices\n    graphgen --capacity 1024 shell"
    )]
    Shell,

    #[command(
        about = "Execute graph commands from a file",
        long_about = "Execute shell commands from a file or stdin, one per line. Exits non-zero if any line reported an error.",
        after_help = "EXAMPLES:\n    # Run a script\n    graphgen run build.graph\n\n    # Pipe commands in and get JSON reports\n    printf 'size 3\\narch add 0 1\\ntell\\n' | graphgen --json run -"
    )]
    Run(cmd::run::RunArgs),

    #[command(
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    graphgen completions bash\n\n    # Generate zsh completions\n    graphgen completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("GRAPHGEN_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "graphgen=debug,info"
        } else {
            "graphgen=info,warn"
        })
    });

    let format = env::var("GRAPHGEN_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<GraphgenConfig> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(capacity) = cli.capacity {
        config.graph.default_capacity = usize::from(capacity);
    }
    if cli.no_color || env::var_os("NO_COLOR").is_some() {
        config.display.color = false;
    }
    Ok(config)
}

fn session_setup(mode: OutputMode, config: GraphgenConfig) -> Result<SessionSetup, GraphError> {
    let graph = Graph::with_capacity(config.graph.default_capacity)?;
    Ok(SessionSetup {
        graph,
        color: config.display.color,
        config,
        mode,
    })
}

fn run(command: Commands, mode: OutputMode, config: GraphgenConfig) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Shell => {
            cmd::run::run_shell(session_setup(mode, config)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run(args) => {
            let errors = cmd::run::run_script(&args, session_setup(mode, config)?)?;
            if errors == 0 {
                Ok(ExitCode::SUCCESS)
            } else {
                debug!(errors, "script reported errors");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn fail(mode: OutputMode, report: &CliError) -> ExitCode {
    error!(code = ?report.error_code, "{}", report.message);
    if render_error(mode, &mut io::stderr().lock(), report).is_err() {
        eprintln!("error: {}", report.message);
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = resolve_output_mode(cli.format, cli.json);
    debug!(?mode, "starting");

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            let report = CliError::with_code(format!("{err:#}"), ErrorCode::ConfigParseError);
            return fail(mode, &report);
        }
    };

    match run(cli.command.unwrap_or(Commands::Shell), mode, config) {
        Ok(code) => code,
        Err(err) => {
            let report = err
                .downcast_ref::<GraphError>()
                .map_or_else(|| CliError::new(format!("{err:#}")), CliError::from);
            fail(mode, &report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_shell() {
        let cli = Cli::parse_from(["graphgen"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["graphgen", "run", "-", "--json", "--no-color", "-v"]);
        assert!(cli.json);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Run(_))));
    }

    #[test]
    fn run_takes_a_path() {
        let cli = Cli::parse_from(["graphgen", "run", "script.graph"]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.file, PathBuf::from("script.graph"));
    }

    #[test]
    fn format_flag_accepts_modes() {
        let cli = Cli::parse_from(["graphgen", "--format", "json", "shell"]);
        assert_eq!(cli.format, Some(OutputMode::Json));
        assert!(Cli::try_parse_from(["graphgen", "--format", "xml"]).is_err());
    }

    #[test]
    fn capacity_must_be_positive_and_fit() {
        let cli = Cli::parse_from(["graphgen", "--capacity", "8"]);
        assert_eq!(cli.capacity, Some(8));
        assert!(Cli::try_parse_from(["graphgen", "--capacity", "0"]).is_err());
        assert!(Cli::try_parse_from(["graphgen", "--capacity", "65536"]).is_err());
    }

    #[test]
    fn completions_subcommand_parses() {
        let cli = Cli::parse_from(["graphgen", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(cmd::completions::CompletionsArgs {
                shell: clap_complete::Shell::Bash,
            }))
        ));
    }

    #[test]
    fn capacity_flag_overrides_config() {
        let cli = Cli::parse_from(["graphgen", "--capacity", "4", "--config", "/nonexistent/graphgen.toml"]);
        assert!(resolve_config(&cli).is_err());

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[graph]\ndefault_capacity = 16\n").expect("write config");
        let path = path.to_string_lossy().into_owned();

        let cli = Cli::parse_from(["graphgen", "--capacity", "4", "--config", &path, "--no-color"]);
        let config = resolve_config(&cli).expect("config");
        assert_eq!(config.graph.default_capacity, 4);
        assert!(!config.display.color);
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
