//! Error types for the generator driver.

use thiserror::Error;

use intkey_forge_core::CoreError;

/// Errors a populate run can fail with. All are fatal: the generator
/// is single-shot and does not retry or clean up partial output.
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}
