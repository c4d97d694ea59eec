//! Engine-level errors: failures that can only be detected once a search is
//! actually running, as opposed to [`foxhole_core::ConfigError`] which is
//! raised while resolving the board parameters.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The Bisector's day ceiling (`bisect::MAX_DAYS`) was reached without
    /// converging. In practice this means the puzzle parameters describe a
    /// board with no solution short enough for the solver to ever confirm.
    #[error("no solution found within the {max_days}-day search ceiling")]
    DayCeilingReached { max_days: u32 },
}
