//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `dynamic_paths.csv`
//! - `dynamic_obstacles.csv`
//! - `final_ranked_paths.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use gr_sim::{HistoryEntry, RunReport};

use crate::row::{ObstacleRow, PathRow, RankedRow};
use crate::OutputResult;

/// Writes run artifacts to three CSV files.
pub struct CsvReporter {
    paths:     Writer<File>,
    obstacles: Writer<File>,
    ranked:    Writer<File>,
    finished:  bool,
}

impl CsvReporter {
    /// Open (or create) the three CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut paths = Writer::from_path(dir.join("dynamic_paths.csv"))?;
        paths.write_record(["time_step", "path_id", "nodes", "cost", "time", "completed"])?;

        let mut obstacles = Writer::from_path(dir.join("dynamic_obstacles.csv"))?;
        obstacles.write_record(["time_step", "positions"])?;

        let mut ranked = Writer::from_path(dir.join("final_ranked_paths.csv"))?;
        ranked.write_record([
            "rank",
            "path_id",
            "start_node",
            "end_node",
            "nodes",
            "cost",
            "time",
        ])?;

        Ok(Self {
            paths,
            obstacles,
            ranked,
            finished: false,
        })
    }

    /// Write a whole run: the full path history, the obstacle log, and the
    /// ranked completed subset (in its given order, 1-based ranks).
    pub fn write_run(&mut self, report: &RunReport, ranked: &[HistoryEntry]) -> OutputResult<()> {
        let path_rows: Vec<PathRow> = report.history.iter().map(PathRow::from_entry).collect();
        self.write_paths(&path_rows)?;

        let obstacle_rows: Vec<ObstacleRow> =
            report.obstacle_log.iter().map(ObstacleRow::from_entry).collect();
        self.write_obstacles(&obstacle_rows)?;

        let ranked_rows: Vec<RankedRow> = ranked
            .iter()
            .enumerate()
            .map(|(i, entry)| RankedRow::from_entry(i + 1, entry))
            .collect();
        self.write_ranked(&ranked_rows)
    }

    pub fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        for row in rows {
            self.paths.write_record(&[
                row.time_step.to_string(),
                row.path_id.clone(),
                row.nodes.clone(),
                row.cost.to_string(),
                row.time.to_string(),
                row.completed.to_string(),
            ])?;
        }
        Ok(())
    }

    pub fn write_obstacles(&mut self, rows: &[ObstacleRow]) -> OutputResult<()> {
        for row in rows {
            self.obstacles
                .write_record(&[row.time_step.to_string(), row.positions.clone()])?;
        }
        Ok(())
    }

    pub fn write_ranked(&mut self, rows: &[RankedRow]) -> OutputResult<()> {
        for row in rows {
            self.ranked.write_record(&[
                row.rank.to_string(),
                row.path_id.clone(),
                row.start_node.clone(),
                row.end_node.clone(),
                row.nodes.clone(),
                row.cost.to_string(),
                row.time.to_string(),
            ])?;
        }
        Ok(())
    }

    /// Flush all files.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.paths.flush()?;
        self.obstacles.flush()?;
        self.ranked.flush()?;
        Ok(())
    }
}
