//! Epidemic simulation driver.
//!
//! Loads configuration, spawns the population, seeds one index case, runs
//! the day loop until the outbreak burns out (plus a configurable tail) or a
//! day cap is hit, and writes the statistics report. All of this consumes
//! only the kernel's public state; the simulation itself lives in the
//! library.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::process::ExitCode;

use sim_core::output::{self, StatsCollector};
use sim_core::setup;
use sim_core::{advance_day, Environment, SimError, SimulationConfig};

/// Command line arguments for the simulation.
#[derive(Parser, Debug)]
#[command(name = "epidemic_sim")]
#[command(about = "An agent-based epidemic simulator")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility (overrides the config)
    #[arg(long)]
    seed: Option<u64>,

    /// Hard cap on simulated days (overrides the config)
    #[arg(long)]
    max_days: Option<u64>,

    /// Population size (overrides the config)
    #[arg(long)]
    population: Option<usize>,

    /// Directory for the statistics report
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_target(false).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max_days) = args.max_days {
        config.max_days = max_days;
    }
    if let Some(size) = args.population {
        config.population.size = size;
    }
    config.validate()?;

    println!("Epidemic Simulator");
    println!("==================");
    println!("Seed: {}", config.seed);
    println!("Population: {}", config.population.size);
    println!(
        "Grid: {0}x{0} (granularity {1})",
        10usize.pow(config.granularity) + 1,
        config.granularity
    );
    println!(
        "Attenuation: {} AOE: {}",
        config.environment.attenuation, config.environment.area_of_effect
    );
    println!();

    let mut rng = SmallRng::seed_from_u64(config.seed);

    let mut population = setup::spawn_population(&config, &mut rng)?;
    let mut landscape = Environment::new(
        config.granularity,
        config.environment.attenuation,
        config.environment.area_of_effect,
    )?;

    let patient_zero = rng.gen_range(0..population.len());
    setup::seed_index_case(&mut population, patient_zero)?;

    // The field picks up the index case before the first day runs.
    landscape.update(&population);

    let mut collector = StatsCollector::new();
    collector.record(output::census(0, &population));

    println!("Starting simulation...");
    let mut day = 0;
    let mut quiet_days = 0;
    while day < config.max_days {
        day += 1;
        advance_day(&mut population, &mut landscape, &config.demographics, &mut rng)?;

        let counts = output::census(day, &population);
        collector.record(counts);

        if day % 10 == 0 {
            println!(
                "Day {:>4}: {} healthy, {} infected, {} dead",
                day, counts.healthy, counts.infected, counts.dead
            );
        }

        // Run a short tail past extinction so the field decays visibly in
        // the report, then stop.
        if counts.infected == 0 {
            quiet_days += 1;
            if quiet_days >= config.extra_days {
                break;
            }
        } else {
            quiet_days = 0;
        }
    }

    let summary = collector.summary(&population);
    let report = output::SimulationReport {
        summary: summary.clone(),
        demographics: output::demographics_summary(&population),
        history: collector.history().to_vec(),
    };
    let path = output::write_stats(&args.output_dir, &report)?;

    println!();
    println!(
        "Simulation complete. Ran {} days: {} of {} infected, {} dead (peak {}).",
        summary.days_run,
        summary.ever_infected,
        summary.population,
        summary.dead,
        summary.peak_infected
    );
    println!("Wrote {}", path.display());

    Ok(())
}
