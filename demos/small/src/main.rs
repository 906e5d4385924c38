//! small — compact demo scenario for the gridroute planner.
//!
//! Runs a 12×12 dynamic-obstacle scenario with three sources converging on
//! one destination, ranks the completed routes by travel time, and writes
//! the run artifacts under `output/small/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use gr_core::{Cell, Connectivity, ObstacleMode, PlannerConfig, RouteKey, Tick};
use gr_output::{write_summary_json, CsvReporter, RunSummary};
use gr_rank::{rank, RankCriterion};
use gr_sim::{PlanObserver, PlannerBuilder, Termination};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROWS:              u32  = 12;
const COLS:              u32  = 12;
const OBSTACLE_DENSITY:  f64  = 0.2;
const SEED:              u64  = 42;
const RANKING_CRITERION: &str = "time";
const PROGRESS_INTERVAL: u64  = 8;

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter;

impl PlanObserver for ProgressPrinter {
    fn on_route_completed(&mut self, tick: Tick, key: &RouteKey) {
        println!("  {tick}: completed {key}");
    }

    fn on_tick_end(&mut self, tick: Tick, new_records: usize) {
        if tick.0 % PROGRESS_INTERVAL == 0 {
            println!("  {tick}: {new_records} new records this tick");
        }
    }

    fn on_run_end(&mut self, final_tick: Tick, termination: Termination) {
        println!("  {final_tick}: run ended ({termination})");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== small — gridroute planner demo ===");
    println!(
        "Grid: {ROWS}x{COLS}  |  Obstacles: dynamic @ {OBSTACLE_DENSITY}  |  Seed: {SEED}"
    );
    println!();

    // 1. Configure the run.
    let config = PlannerConfig {
        rows:             ROWS,
        cols:             COLS,
        connectivity:     Connectivity::Four,
        obstacle_mode:    ObstacleMode::Dynamic,
        obstacle_density: OBSTACLE_DENSITY,
        sources:          vec![Cell::new(0, 0), Cell::new(1, 11), Cell::new(10, 2)],
        destinations:     vec![Cell::new(10, 10)],
        step_ceiling:     PlannerConfig::DEFAULT_STEP_CEILING,
        stagnation_limit: PlannerConfig::DEFAULT_STAGNATION_LIMIT,
        seed:             SEED,
    };
    println!(
        "Routes: {} sources x {} destinations, both directions",
        config.sources.len(),
        config.destinations.len()
    );

    // 2. Build and run to a terminal state.
    let planner = PlannerBuilder::new(config).build()?;
    let started = Instant::now();
    let report = planner.run(&mut ProgressPrinter);
    let elapsed = started.elapsed().as_secs_f64();

    // 3. Rank the completed routes.
    let ranked = rank(&report.completed(), RankCriterion::parse(RANKING_CRITERION));

    // 4. Write the artifacts.
    let out_dir = Path::new("output/small");
    std::fs::create_dir_all(out_dir)?;
    let mut reporter = CsvReporter::new(out_dir)?;
    reporter.write_run(&report, &ranked)?;
    reporter.finish()?;
    write_summary_json(&out_dir.join("results.json"), &RunSummary::new(&report, elapsed))?;

    // 5. Summary.
    println!();
    println!(
        "Terminal state: {}  (tick {}, {:.3} s)",
        report.termination, report.final_tick.0, elapsed
    );
    println!(
        "History: {} records, {} completed",
        report.history.len(),
        report.completed_count()
    );
    for (i, entry) in ranked.iter().take(5).enumerate() {
        println!(
            "  #{}  {}  cost {:.3}  time {}",
            i + 1,
            entry.key,
            entry.record.cost,
            entry.record.time
        );
    }
    println!("Artifacts written to {}", out_dir.display());

    Ok(())
}
