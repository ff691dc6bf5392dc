//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum StreamsError {
    /// Producer thread could not be started.
    #[error("failed to spawn producer thread")]
    Spawn(#[from] std::io::Error),
}
