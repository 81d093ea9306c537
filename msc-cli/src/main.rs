//! MSC - Morphological Source Code
//! Command-line driver for the register / arena / operator model

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use msc_core::config;
use msc_core::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "msc")]
#[command(author = "Phovos")]
#[command(version = "2026.1.16")]
#[command(about = "MSC - register propagation over a circular arena", long_about = None)]
struct Cli {
    /// Correlation id attached to every log line
    #[arg(
        long,
        global = true,
        value_name = "CID",
        env = config::CORRELATION_ID_KEY,
        default_value = config::DEFAULT_CORRELATION_ID
    )]
    cid: String,

    /// Verbose logging (per-application trace events)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference scenario (two seeds, one covariant and one contravariant step)
    Demo {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Seed an arena and propagate a register through an operator
    Run {
        /// Operator phase (positive = covariant, negative = contravariant)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        phase: i64,

        /// Number of applications
        #[arg(short, long, env = config::MAX_STEPS_KEY, default_value_t = config::DEFAULT_MAX_STEPS)]
        steps: usize,

        /// Arena capacity
        #[arg(
            short,
            long,
            env = config::ARENA_CAPACITY_KEY,
            default_value_t = config::DEFAULT_ARENA_CAPACITY,
            allow_negative_numbers = true
        )]
        capacity: i64,

        /// Seed registers pushed before propagating (decimal, 0x.. or 0b..)
        #[arg(long = "seed", value_name = "BYTE", value_parser = parse_byte)]
        seeds: Vec<u8>,

        /// Initial register (decimal, 0x.. or 0b..)
        #[arg(short, long, default_value = "0b10110010", value_parser = parse_byte)]
        input: u8,

        /// Stop as soon as an application returns its input
        #[arg(
            long,
            env = config::DETECT_STABLE_KEY,
            action = ArgAction::SetTrue,
            value_parser = BoolishValueParser::new()
        )]
        stable: bool,

        /// Print every intermediate register
        #[arg(long)]
        show_steps: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the register layout and operator rules
    Info,
}

fn main() {
    // clap reads MSC_* from the environment, .env included
    config::load_dotenv();
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let span = tracing::info_span!("msc", cid = %cli.cid);
    let _guard = span.enter();

    let outcome = match cli.command {
        Commands::Demo { json } => demo_command(json),

        Commands::Run {
            phase,
            steps,
            capacity,
            seeds,
            input,
            stable,
            show_steps,
            json,
        } => {
            let options = RunOptions {
                phase,
                steps,
                capacity,
                seeds,
                input,
                detect_stable: stable,
                show_steps,
                json,
            };
            run_command(&options)
        }

        Commands::Info => {
            print_info();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "msc=debug,msc_core=trace"
    } else {
        "msc=info,msc_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ============================================================================
// Commands
// ============================================================================

fn demo_command(json: bool) -> Result<()> {
    tracing::info!("demo scenario started");
    let report = msc_core::demo()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Initial registers:".bold());
    println!("  {} {}", report.seeds[0], report.seeds[1]);
    println!();
    println!("{}", "Covariant propagation:".bold());
    println!("  {}", report.covariant.to_string().green());
    println!();
    println!("{}", "Contravariant propagation:".bold());
    println!("  {}", report.contravariant.to_string().yellow());
    println!();
    println!("{}", "Arena state (entropy field):".bold());
    println!("  {:?}", raw_list(&report.arena.occupied));

    Ok(())
}

struct RunOptions {
    phase: i64,
    steps: usize,
    capacity: i64,
    seeds: Vec<u8>,
    input: u8,
    detect_stable: bool,
    show_steps: bool,
    json: bool,
}

#[derive(serde::Serialize)]
struct RunReport {
    phase: i64,
    input: Register,
    result: PropagationResult,
    arena: ArenaSnapshot,
}

fn run_command(options: &RunOptions) -> Result<()> {
    let mut arena = Arena::with_signed_capacity(options.capacity)
        .with_context(|| format!("cannot build arena of capacity {}", options.capacity))?;
    for &seed in &options.seeds {
        arena.push(Register::from_raw(seed));
    }

    let operator = Operator::new(options.phase);
    let input = Register::from_raw(options.input);
    let config = PropagationConfig {
        max_steps: options.steps,
        detect_stable: options.detect_stable,
        keep_history: options.json,
    };

    tracing::info!(
        phase = options.phase,
        capacity = arena.capacity(),
        seeds = options.seeds.len(),
        steps = options.steps,
        "propagation started"
    );

    let show_steps = options.show_steps && !options.json;
    let runner = PropagationRunner::new(&operator)
        .with_config(config)
        .on_step(move |step, register| {
            if show_steps {
                println!("  {:>4}  {}", step.to_string().dimmed(), register);
            }
        });

    if show_steps {
        println!("{} {}", "Propagating".green().bold(), operator.name().cyan());
    }
    let result = runner.run(input, &mut arena);

    if options.json {
        let report = RunReport {
            phase: options.phase,
            input,
            result,
            arena: arena.snapshot(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "      Input".green().bold(), input);
    println!("{} {}", "     Output".green().bold(), result.register);
    println!(
        "{} {} ({:?})",
        "      Steps".green().bold(),
        result.steps,
        result.stop_reason
    );
    println!(
        "{} {:?} ({}/{} occupied, cursor {})",
        "      Arena".green().bold(),
        arena.raw_view(),
        arena.len(),
        arena.capacity(),
        arena.cursor()
    );

    Ok(())
}

fn print_info() {
    println!("{}", "MSC - Morphological Source Code".bold());
    println!();
    println!("{}", "Register layout (8 bits):".bold());
    println!("  bit   7   6   5   4   3   2   1   0");
    println!("      [ C | V   V   V | T   T   T   T ]");
    println!("  C = carry, V = variance (3 bits), T = tag (4 bits)");
    println!();
    println!("{}", "Operator(phase) rules:".bold());
    println!("  idx     = (raw ^ (phase & 0xFF)) % capacity");
    println!("  entropy = popcount(raw ^ arena[idx]) / 8");
    println!("  delta   = floor(|entropy * phase| * 15) & 0xF");
    println!("  T' = T ^ delta");
    println!("  V' = (V + (phase & 0x3)) & 0x7");
    println!("  C' = C ^ (phase < 0)");
    println!("  push(r') into the arena, return r'");
    println!();
    println!("{}", "Commands:".bold());
    println!("  msc demo                          # Reference scenario");
    println!("  msc demo --json                   # Same, as JSON");
    println!("  msc run -p -1 -s 10 --seed 0x59   # Contravariant propagation");
    println!("  msc run --stable -p 4 -i 0        # Stop on a fixed point");
    println!("  msc info                          # Show this info");
    println!();
    println!("{}", "Environment:".bold());
    println!("  {:<19} --capacity ({})", config::ARENA_CAPACITY_KEY, config::DEFAULT_ARENA_CAPACITY);
    println!("  {:<19} --steps ({})", config::MAX_STEPS_KEY, config::DEFAULT_MAX_STEPS);
    println!("  {:<19} --stable (false)", config::DETECT_STABLE_KEY);
    println!("  {:<19} --cid ({})", config::CORRELATION_ID_KEY, config::DEFAULT_CORRELATION_ID);
    println!("  .env is loaded before arguments; flags override both");
    println!("  RUST_LOG            log filter");
}

// ============================================================================
// Helpers
// ============================================================================

fn raw_list(registers: &[Register]) -> Vec<u8> {
    registers.iter().map(Register::raw).collect()
}

/// Parse a byte written in decimal, hex (`0x`) or binary (`0b`)
fn parse_byte(s: &str) -> Result<u8, String> {
    let s = s.trim().replace('_', "");
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        u8::from_str_radix(bin, 2)
    } else {
        s.parse::<u8>()
    };

    parsed.map_err(|e| format!("'{s}' is not a byte (0..=255): {e}"))
}
