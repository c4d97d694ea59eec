//! The search engine: iterative deepening over [`core::SearchCore`] probes,
//! each a full depth-first exploration of one fixed day limit.

pub mod applier;
pub mod bisect;
pub mod core;
pub mod statekey;
pub mod tt;

use foxhole_core::{BitBoard, MoveCatalogue, Params, Topology};

use bisect::{Bisector, MAX_DAYS};
use core::{Outcome, SearchCore};

use crate::error::EngineError;

/// The minimum day count a solution exists for, and the moves that achieve
/// it, or a report that the puzzle has no solution within the day ceiling.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// `true` if a winning schedule was found.
    pub solved: bool,
    /// The minimum number of days a win takes, when `solved`.
    pub days: Option<u32>,
    /// The visit pattern played each day, `moves[0]` is day 1.
    pub moves: Vec<BitBoard>,
}

/// Owns the board geometry and runs the Bisector loop over repeated
/// [`SearchCore`] probes until the minimum solvable day count converges (or
/// every day up to the ceiling has been shown unwinnable).
pub struct Engine {
    params: Params,
    topology: Topology,
    catalogue: MoveCatalogue,
}

impl Engine {
    pub fn new(params: Params) -> Engine {
        let topology = Topology::build(&params);
        let catalogue = MoveCatalogue::build(&params);
        Engine { params, topology, catalogue }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Calls `on_probe(day_limit, won)` after every probe, mirroring the way
    /// the original solver logs each bisection step before moving on.
    ///
    /// Returns [`EngineError::DayCeilingReached`] if the Bisector's day
    /// ceiling is reached without ever confirming the puzzle unwinnable
    /// (every probe overflowed, so a larger ceiling might still find a win) —
    /// as opposed to [`SearchResult::solved`] being `false`, which means a
    /// probe ran to exhaustion and proved no schedule exists at any day
    /// count.
    pub fn search<F>(&self, mut on_probe: F) -> Result<SearchResult, EngineError>
    where
        F: FnMut(u32, bool),
    {
        let seed = (self.params.holes() + self.params.visits() - 1) / self.params.visits();
        let mut bisector = Bisector::new(seed.max(1));
        let mut core = SearchCore::new(&self.params, &self.topology, &self.catalogue);

        let mut best: Option<(u32, Vec<BitBoard>)> = None;
        let mut confirmed_unwinnable = false;
        let mut next_limit = bisector.next(None);

        while let Some(limit) = next_limit {
            let (outcome, schedule) = core.probe(limit);
            let found = match outcome {
                Outcome::Won => {
                    let day = schedule.victory_day.expect("Won implies a recorded victory day");
                    tracing::debug!(day, limit, "probe won");
                    on_probe(limit, true);
                    if best.as_ref().is_none_or(|(best_day, _)| day < *best_day) {
                        best = Some((day, schedule.winning_moves()));
                    }
                    Some(day)
                }
                Outcome::Lost => {
                    tracing::debug!(limit, "probe lost: no solution at any day limit");
                    on_probe(limit, false);
                    confirmed_unwinnable = true;
                    break;
                }
                Outcome::Overflow => {
                    tracing::debug!(limit, "probe overflow: day limit too tight");
                    on_probe(limit, false);
                    None
                }
            };
            next_limit = bisector.next(found);
        }

        match best {
            Some((days, moves)) => {
                tracing::info!(days, "search converged");
                Ok(SearchResult { solved: true, days: Some(days), moves })
            }
            None if confirmed_unwinnable => Ok(SearchResult { solved: false, days: None, moves: Vec::new() }),
            None => {
                tracing::warn!(max_days = MAX_DAYS, "bisector exhausted its day ceiling without converging");
                Err(EngineError::DayCeilingReached { max_days: MAX_DAYS })
            }
        }
    }
}
