use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use cpu_sched_sim::{
    AlgorithmKind, ProcessSpec, Sim, SimConfig, SimError, SimOutcome,
    core::Ticks,
    input::parse_process_specs,
    report::{Comparison, Report},
    sim::DEFAULT_MAX_PROCESSES,
};
use rand::prelude::*;

#[derive(Parser, Debug)]
#[command(version, about = "Simulate CPU scheduling algorithms on a small process set")]
struct Args {
    /// Process list, one `arrival burst [priority]` per line
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate this many random processes instead of reading a file
    #[arg(short, long)]
    random: Option<usize>,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// fcfs, sjf, priority, rr, or all
    #[arg(short, long, default_value = "all")]
    algorithm: String,

    /// Round robin time quantum
    #[arg(short, long)]
    quantum: Option<Ticks>,

    #[arg(long, default_value_t = DEFAULT_MAX_PROCESSES)]
    max_processes: usize,

    /// Print the scheduling event trace
    #[arg(short, long)]
    trace: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let specs = match (&args.input, args.random) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_process_specs(&text).with_context(|| format!("in {}", path.display()))?
        }
        (None, Some(count)) => random_specs(count, args.seed, args.max_processes)?,
        (None, None) => bail!("either --input or --random is required"),
    };
    log::info!("loaded {} processes", specs.len());

    let sim = Sim::new(SimConfig::default().with_max_processes(args.max_processes));
    let outcomes = if args.algorithm.eq_ignore_ascii_case("all") {
        sim.run_all(&specs, args.quantum)?
    } else {
        let kind: AlgorithmKind = args.algorithm.parse()?;
        vec![sim.run(kind, &specs, args.quantum)?]
    };

    for outcome in &outcomes {
        print_outcome(outcome, args.trace);
    }
    if outcomes.len() > 1 {
        print!("{}", Comparison(&outcomes));
    }

    Ok(())
}

fn print_outcome(outcome: &SimOutcome, trace: bool) {
    if trace {
        for event in &outcome.events {
            println!("{event}");
        }
        println!();
    }
    println!("{}", Report(outcome));
}

// Arrivals spread over the first few ticks, bursts and priorities small.
// Count is checked before anything is generated.
fn random_specs(count: usize, seed: u64, max: usize) -> Result<Vec<ProcessSpec>, SimError> {
    if count == 0 || count > max {
        return Err(SimError::InvalidProcessCount { count, max });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let horizon = 2 * count as u64;

    Ok((0..count)
        .map(|_| ProcessSpec {
            arrival_time: rng.random_range(0..=horizon),
            burst_time: rng.random_range(1..=10),
            priority: rng.random_range(1..=5),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_specs_rejects_count_above_limit() {
        assert_eq!(
            random_specs(usize::MAX, 0, 10),
            Err(SimError::InvalidProcessCount {
                count: usize::MAX,
                max: 10
            })
        );
        assert!(random_specs(0, 0, 10).is_err());
    }

    #[test]
    fn test_random_specs_are_seeded_and_valid() {
        let specs = random_specs(10, 3, 10).unwrap();
        assert_eq!(specs.len(), 10);
        assert_eq!(random_specs(10, 3, 10).unwrap(), specs);
        assert!(specs.iter().all(|s| s.burst_time > 0 && s.arrival_time <= 20));
    }
}
