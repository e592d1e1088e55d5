//! Game balance simulator CLI.
//!
//! Run headless sessions to analyze mining and combat pacing.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # Default: 100 runs, 2000 ticks
//!   cargo run --bin simulate -- -n 20 --digs 3      # Aggressive digger
//!   cargo run --bin simulate -- --seed 42 --json    # Reproducible, with JSON report

use math_miner::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              MATH MINER BALANCE SIMULATOR                     ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Ticks per Run:  {}", config.max_ticks_per_run);
    println!("  Digs per Tick:  {}", config.digs_per_tick);
    println!("  Difficulty:     {}", config.math_difficulty);
    println!("  Multiplier:     x{}", config.resource_multiplier);
    if config.testing_mode {
        println!("  Testing Mode:   on");
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if write_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        if let Err(e) = std::fs::write(&filename, report.to_json()) {
            error!(error = %e, file = %filename, "failed to write JSON report");
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", filename);
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(config.num_runs);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run =
                        args[i + 1].parse().unwrap_or(config.max_ticks_per_run);
                    i += 1;
                }
            }
            "-d" | "--digs" => {
                if i + 1 < args.len() {
                    config.digs_per_tick = args[i + 1].parse().unwrap_or(config.digs_per_tick);
                    i += 1;
                }
            }
            "--difficulty" => {
                if i + 1 < args.len() {
                    config.math_difficulty =
                        args[i + 1].parse().unwrap_or(config.math_difficulty);
                    i += 1;
                }
            }
            "-m" | "--multiplier" => {
                if i + 1 < args.len() {
                    config.resource_multiplier =
                        args[i + 1].parse().unwrap_or(config.resource_multiplier);
                    i += 1;
                }
            }
            "--testing" => {
                config.testing_mode = true;
            }
            "--json" => {
                write_json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--marathon" => {
                config = SimConfig::marathon();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, write_json)
}

fn print_help() {
    println!("Math Miner Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>          Number of simulation runs (default: 100)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -t, --ticks <T>         Combat ticks per run (default: 2000)");
    println!("    -d, --digs <D>          Digs between combat ticks (default: 1)");
    println!("    --difficulty <1-5>      Math difficulty setting (default: 3)");
    println!("    -m, --multiplier <M>    Resource multiplier (default: 1)");
    println!("    --testing               Testing mode: free upgrades, multiplier up to 100");
    println!("    --json                  Save JSON report");
    println!("    -v, --verbose           Log every run");
    println!("    --quick                 Quick test (10 runs, 300 ticks)");
    println!("    --marathon              Long runs (20 runs, 20000 ticks, 3 digs)");
    println!("    -h, --help              Show this help");
}
