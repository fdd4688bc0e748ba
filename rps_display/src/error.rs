//! Error types for the display binary.

/// Top-level error for the display binary, propagated out of `main` with `?`.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: rps_core::ConfigError,
    },

    /// The native window could not be created or crashed.
    #[error("window error: {source}")]
    Window {
        /// The underlying eframe error.
        #[from]
        source: eframe::Error,
    },
}
