//! Fibonacci CLI
//!
//! Evaluates a single Fibonacci term and prints `Fibonacci(<n>) = <result>`.
//! With no arguments it computes F(50) by naive recursion.

mod run_config;

use clap::{Args, CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use fibcore::{Evaluator, EvaluatorConfig, NegativePolicy, OverflowPolicy, Strategy};
use run_config::RunConfig;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Index evaluated when neither the command line nor a config file names one
const DEFAULT_INDEX: i64 = 50;

#[derive(ClapParser)]
#[command(name = "fib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute the n-th Fibonacci number", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    eval: EvalArgs,
}

#[derive(Args)]
struct EvalArgs {
    /// Index of the term to compute (defaults to 50)
    #[arg(allow_negative_numbers = true)]
    n: Option<i64>,

    /// Evaluation strategy: naive or iterative
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Fail on negative indices instead of returning them unchanged
    #[arg(long)]
    reject_negative: bool,

    /// Fail on i64 overflow instead of wrapping
    #[arg(long)]
    checked: bool,

    /// Path to a TOML run configuration
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => run_completions(shell),
        None => {
            init_logging();
            run_eval(&cli.eval);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fib", &mut io::stdout());
}

fn run_eval(args: &EvalArgs) {
    let file_config = match &args.config {
        Some(path) => match RunConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => RunConfig::default(),
    };

    let (n, config) = resolve(args, &file_config);
    debug!(index = n, ?config, "resolved configuration");

    match Evaluator::new(config).evaluate(n) {
        Ok(value) => println!("Fibonacci({}) = {}", n, value),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Merge command-line flags over the config file over the defaults
fn resolve(args: &EvalArgs, file_config: &RunConfig) -> (i64, EvaluatorConfig) {
    let mut config = file_config.evaluator_config();
    if let Some(strategy) = args.strategy {
        config = config.with_strategy(strategy);
    }
    if args.reject_negative {
        config = config.with_negative_policy(NegativePolicy::Reject);
    }
    if args.checked {
        config = config.with_overflow_policy(OverflowPolicy::Checked);
    }

    let n = args.n.or(file_config.index).unwrap_or(DEFAULT_INDEX);
    (n, config)
}
