//! Prefetcher accuracy simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Suite run:** Evaluate every configured prefetcher on every configured access pattern.
//! 2. **Trace run:** Feed one literal address sequence through one prefetcher with per-access logging.

use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pfsim_core::config::{AccessPattern, Config, PrefetcherKind};
use pfsim_core::{Address, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pfsim",
    author,
    version,
    about = "Memory-access prefetcher accuracy simulator",
    long_about = "Evaluate Markov (transition-table) and Stride prefetchers on synthetic access patterns.\n\nExamples:\n  pfsim run\n  pfsim run --prefetcher markov --window 8 --format json\n  pfsim run --config suite.json\n  pfsim trace --prefetcher markov 0,1,2,3,0,1,2,3"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Overrides RUST_LOG.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the pattern suite and print an accuracy table.
    Run {
        /// JSON configuration file (defaults to the built-in suite).
        #[arg(short, long)]
        config: Option<String>,

        /// Prefetchers to evaluate (repeatable; defaults to the config's list).
        #[arg(short, long, value_enum)]
        prefetcher: Vec<KindArg>,

        #[command(flatten)]
        markov: MarkovArgs,

        /// Seed for random patterns.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },

    /// Feed one address sequence through one prefetcher with per-access logging.
    Trace {
        /// Prefetcher to drive.
        #[arg(short, long, value_enum, default_value_t = KindArg::Markov)]
        prefetcher: KindArg,

        #[command(flatten)]
        markov: MarkovArgs,

        /// Comma-separated addresses, e.g. 0,1,2,0,1,2.
        #[arg(value_delimiter = ',', required = true)]
        addresses: Vec<u64>,
    },
}

/// Transition-table overrides shared by both subcommands.
#[derive(clap::Args, Debug)]
struct MarkovArgs {
    /// Reject addresses at or above this bound (Markov only).
    #[arg(long)]
    num_addresses: Option<usize>,

    /// Access-history window capacity (Markov only).
    #[arg(long)]
    window: Option<usize>,
}

impl MarkovArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(n) = self.num_addresses {
            config.markov.num_addresses = Some(n);
        }
        if let Some(w) = self.window {
            config.markov.history_window_size = w;
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum KindArg {
    Markov,
    Stride,
}

impl From<KindArg> for PrefetcherKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Markov => Self::Markov,
            KindArg::Stride => Self::Stride,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Markdown,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            config,
            prefetcher,
            markov,
            seed,
            format,
        }) => {
            init_tracing(cli.verbose, "warn");
            cmd_run(config, &prefetcher, &markov, seed, format);
        }
        Some(Commands::Trace {
            prefetcher,
            markov,
            addresses,
        }) => {
            init_tracing(cli.verbose, "trace");
            cmd_trace(prefetcher, &markov, addresses);
        }
        None => {
            eprintln!("Prefetcher simulator: pass a subcommand");
            eprintln!();
            eprintln!("  pfsim run [--config suite.json]     Run the pattern suite");
            eprintln!("  pfsim trace -p markov 0,1,2,0,1,2   Trace one sequence");
            eprintln!();
            eprintln!("  pfsim --help  for full options");
            process::exit(1);
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// `-v` flags take precedence; otherwise `RUST_LOG` is honoured, falling back to `default`.
fn init_tracing(verbose: u8, default: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs the configured suite and prints the results.
///
/// Loads the JSON config if given, applies command line overrides, and exits
/// with code 1 if the config cannot be loaded or any run failed.
fn cmd_run(
    config_path: Option<String>,
    prefetchers: &[KindArg],
    markov: &MarkovArgs,
    seed: Option<u64>,
    format: Format,
) {
    let mut config = match config_path {
        Some(path) => Config::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if !prefetchers.is_empty() {
        config.prefetchers = prefetchers.iter().map(|&k| k.into()).collect();
    }
    markov.apply(&mut config);
    if let Some(seed) = seed {
        config.simulation.seed = seed;
    }

    info!(
        patterns = config.simulation.patterns.len(),
        prefetchers = config.prefetchers.len(),
        seed = config.simulation.seed,
        "starting suite"
    );
    let results = Simulator::new(config).run();
    match format {
        Format::Markdown => print!("{results}"),
        Format::Json => match serde_json::to_string_pretty(&results) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
    }

    if results.failures() > 0 {
        eprintln!("[!] {} run(s) failed", results.failures());
        process::exit(1);
    }
}

/// Drives a single literal sequence and prints its statistics.
fn cmd_trace(kind: KindArg, markov: &MarkovArgs, addresses: Vec<u64>) {
    let mut config = Config::default();
    markov.apply(&mut config);

    let kind = PrefetcherKind::from(kind);
    let pattern = AccessPattern::Custom {
        label: "Trace".to_string(),
        addresses: addresses.into_iter().map(Address).collect(),
    };
    let sim = Simulator::new(config);
    match sim.run_one(kind, &pattern) {
        Ok(stats) => {
            println!("prefetcher           {}", kind.name());
            println!("accesses             {}", stats.accesses);
            println!("prefetch.requests    {}", stats.requests);
            println!("prefetch.hits        {}", stats.hits);
            println!("prefetch.unused      {}", stats.unused_evictions);
            println!("prefetch.accuracy    {:.2}", stats.accuracy());
        }
        Err(e) => {
            eprintln!("[!] {e}");
            process::exit(1);
        }
    }
}
