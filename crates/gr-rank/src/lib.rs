//! `gr-rank` — stateless ranking of completed routes.
//!
//! A pure function over the completed subset of a run's history: sort
//! ascending by the selected numeric field, ties broken by input order
//! (stable sort), unknown criteria leave the order untouched.  No side
//! effects, no error cases.

use gr_sim::HistoryEntry;


// ── RankCriterion ────────────────────────────────────────────────────────────

/// Which numeric field orders the ranking.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RankCriterion {
    /// Ascending by accumulated cost.
    Distance,
    /// Ascending by step count.
    Time,
    /// Keep the input order.
    Unranked,
}

impl RankCriterion {
    /// Map a criterion name to its variant.
    ///
    /// Unknown names select [`Unranked`][Self::Unranked] — an unrecognized
    /// criterion means "return the input unchanged", not an error, so
    /// parsing never fails.
    pub fn parse(name: &str) -> Self {
        match name {
            "distance" => RankCriterion::Distance,
            "time" => RankCriterion::Time,
            _ => RankCriterion::Unranked,
        }
    }
}

// ── rank ─────────────────────────────────────────────────────────────────────

/// Order `entries` by `criterion`, stably.
///
/// The caller passes the completed subset of a run report; passing partial
/// records is harmless (they sort by the same fields) but not meaningful.
pub fn rank(entries: &[HistoryEntry], criterion: RankCriterion) -> Vec<HistoryEntry> {
    let mut ranked = entries.to_vec();
    match criterion {
        RankCriterion::Distance => {
            ranked.sort_by(|a, b| a.record.cost.total_cmp(&b.record.cost));
        }
        RankCriterion::Time => {
            ranked.sort_by(|a, b| a.record.time.cmp(&b.record.time));
        }
        RankCriterion::Unranked => {}
    }
    ranked
}
