//! Result and Error types for nucnet-chart

/// Type alias for `Result<T, chart::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nucnet-chart` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    #[error("reference table \"{0}\" has no entries")]
    EmptyTable(String),

    #[error("isotope (z={z:?}, n={n:?}) is outside of the {rows:?}x{cols:?} grid")]
    OutOfBounds {
        z: i64,
        n: i64,
        rows: usize,
        cols: usize,
    },

    #[error("a {rows:?}x{cols:?} grid is too large")]
    GridTooLarge { rows: usize, cols: usize },
}
