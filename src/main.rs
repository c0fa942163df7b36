//! Conference track packing CLI.
//!
//! Reads talks (one per line) from a file and prints the packed schedule.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_tracks::config::DayLayout;
use u_tracks::input::read_talks_from_file;
use u_tracks::models::{Packing, Schedule, TieBreak};
use u_tracks::scheduler::{PermutationSearch, ScheduleKpi, DEFAULT_MAX_PERMUTATIONS};

#[derive(Parser)]
#[command(name = "u-tracks")]
#[command(about = "Pack conference talks into the fewest morning/afternoon tracks")]
struct Cli {
    /// A text file from which to read the list of talks (one per line)
    input_file: PathBuf,

    /// Packing policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Balanced)]
    policy: PolicyArg,

    /// Search over input orderings and keep the best schedule
    #[arg(long)]
    search: bool,

    /// Maximum permutations to test in search mode (-1 = all, could take very long)
    #[arg(long, default_value_t = DEFAULT_MAX_PERMUTATIONS as i64, allow_negative_numbers = true)]
    max_permutations: i64,

    /// Shuffle the talks before searching
    #[arg(long)]
    shuffle: bool,

    /// Seed for --shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Print the schedule and KPIs as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Best-fit-decreasing, afternoons of earlier tracks preferred
    Balanced,
    /// Best-fit-decreasing, least waste anywhere
    PreferMornings,
    /// Input order, current track only
    FirstFit,
}

impl From<PolicyArg> for Packing {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Balanced => Packing::BestFitDecreasing(TieBreak::Balanced),
            PolicyArg::PreferMornings => Packing::BestFitDecreasing(TieBreak::PreferMornings),
            PolicyArg::FirstFit => Packing::FirstFit,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let layout = DayLayout::default();
    let talks = read_talks_from_file(&cli.input_file, &layout)
        .with_context(|| format!("reading talks from {}", cli.input_file.display()))?;
    info!(talks = talks.len(), policy = ?cli.policy, "loaded talks");

    let template = Schedule::new(layout).with_packing(cli.policy.into());

    let (schedule, permutations) = if cli.search {
        let max = usize::try_from(cli.max_permutations).ok();
        let mut search = PermutationSearch::new()
            .with_max_permutations(max)
            .with_shuffle(cli.shuffle);
        if let Some(seed) = cli.seed {
            search = search.with_seed(seed);
        }
        let outcome = search.run(&talks, &template).context("permutation search failed")?;
        (outcome.best, Some(outcome.permutations_tested))
    } else {
        let mut schedule = template;
        schedule.add_talks(talks).context("packing talks failed")?;
        (schedule, None)
    };

    let kpi = ScheduleKpi::calculate(&schedule);
    info!(
        tracks = kpi.track_count,
        lower_bound = kpi.lower_bound_tracks,
        wasted = kpi.wasted_minutes,
        "schedule ready"
    );

    if cli.json {
        let report = serde_json::json!({
            "schedule": schedule,
            "kpi": kpi,
            "permutations_tested": permutations,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cli.verbose {
        if let Some(tested) = permutations {
            println!("\nTotal permutations tested          : {tested}");
        }
        println!("Tracks used (lower bound)          : {} ({})", kpi.track_count, kpi.lower_bound_tracks);
        println!("Wasted time in winning schedule    : {} mins\n", kpi.wasted_minutes);
    }
    println!("{schedule}\n");
    Ok(())
}
