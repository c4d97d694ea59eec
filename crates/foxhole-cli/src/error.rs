//! CLI-facing errors.

/// Errors that can occur while turning parsed command-line flags into a
/// usable solver configuration.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The board parameters resolved to more holes than the solver supports.
    #[error(transparent)]
    Config(#[from] foxhole_core::ConfigError),
}
