// src/main.rs

use chrono::Utc;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{error, info};
use std::io::{self, BufRead};
use std::path::PathBuf;

use legendre::config::LegendreConfig;
use legendre::integer_math::prime_table::PrimeTable;
use legendre::puzzle::command::help_message;
use legendre::puzzle::{LegendreModule, PressOutcome, StdoutSink};
use legendre::reduction::{survey, ReductionEngine};
use legendre::{LegendreError, Result};

#[derive(Parser)]
#[command(name = "legendre", version, about = "Traced Legendre symbol reduction and quadratic residue rounds")]
struct Cli {
    /// Configuration file (defaults to ./legendre.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce (TOP|MODULUS) and print every step
    Eval {
        top: i64,
        modulus: i64,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play rounds on stdin: r / n / press r / press n, help, quit
    Play {
        #[arg(long)]
        seed: Option<u64>,

        /// Module instance id used in log prefixes
        #[arg(long, default_value_t = 1)]
        id: u32,
    },

    /// Check every (top|p) below the prime bound against Euler's criterion
    Survey {
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => LegendreConfig::load_from_file(path),
        None => LegendreConfig::load(),
    };
    let config = loaded.unwrap_or_else(|e| {
        eprintln!("Error loading configuration, using defaults: {}", e);
        LegendreConfig::default()
    });

    // Initialize the logger
    let env = Env::default()
        .filter_or("LEGENDRE_LOG", config.log_level.as_str())
        .write_style_or("LEGENDRE_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(cli.command, config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, mut config: LegendreConfig) -> Result<()> {
    let table = PrimeTable::below(config.engine.prime_bound);

    match command {
        Commands::Eval { top, modulus, json } => {
            let engine = ReductionEngine::with_limit(&table, config.engine.max_generations);
            let evaluation = engine.evaluate_checked(top, modulus)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&evaluation)?);
            } else {
                for line in evaluation.trace_lines() {
                    println!("{}", line);
                }
                println!("{}", evaluation.verdict());
            }
        }

        Commands::Play { seed, id } => {
            if seed.is_some() {
                config.puzzle.seed = seed;
            }
            let mut module = LegendreModule::new(id, &table, &config, StdoutSink);
            module.activate()?;
            println!("{}", help_message(id));
            print_displays(&module);

            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                match line.trim() {
                    "" => continue,
                    "quit" | "exit" => break,
                    "help" => println!("{}", help_message(id)),
                    text => match module.handle_command(text, Utc::now()) {
                        Ok(PressOutcome::Solved) => break,
                        Ok(PressOutcome::Strike) => {
                            print_displays(&module);
                            if let Some(due) = module.pending_retry() {
                                let wait = (due - Utc::now()).to_std().unwrap_or_default();
                                std::thread::sleep(wait);
                            }
                            module.tick(Utc::now())?;
                            print_displays(&module);
                        }
                        Ok(PressOutcome::Ignored) => {}
                        Err(LegendreError::UnknownCommand(command)) => {
                            println!("Unknown command \"{}\". {}", command, help_message(id));
                        }
                        Err(e) => return Err(e),
                    },
                }
            }
        }

        Commands::Survey { json } => {
            let engine = ReductionEngine::with_limit(&table, config.engine.max_generations);
            let report = survey(&engine);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                info!("Survey finished below {}", table.bound());
                println!("Pairs checked:    {}", report.pairs_checked);
                println!("Max generations:  {}", report.max_generations);
                println!("Mismatches:       {:?}", report.mismatches);
                println!("Failures:         {:?}", report.failures);
            }
        }
    }

    Ok(())
}

fn print_displays(module: &LegendreModule<StdoutSink>) {
    let (top, bottom) = module.displays();
    println!("[{}]", top);
    println!("[{}]", bottom);
}
