//! Result and Error types for nucnet-network

/// Type alias for `Result<T, network::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nucnet-network` crate
///
/// Problems with the network files themselves are never errors. Missing files
/// and unreadable lines are logged and skipped, so only failures to decide
/// where to look end up here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// A MESA installation was requested but `MESA_DIR` is not set
    #[error("environment variable MESA_DIR is not set")]
    MissingMesaDir,

    /// The search location exists but is not a directory
    #[error("network search path {0:?} is not a directory")]
    NotADirectory(std::path::PathBuf),
}
