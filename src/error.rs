use derive_more::{Display, Error};

/// Errors surfaced by the driver.
///
/// Both variants are fatal: there is no retry or partial-success path, so
/// callers either propagate them or abort the current frame.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The SPI device could not be opened or configured at construction.
    #[display("cannot open SPI device `{device}`: {source}")]
    TransportOpen {
        /// Device path that failed to open, e.g. `/dev/spidev0.0`.
        device: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Writing a serialized frame to the bus failed. The frame is not
    /// considered sent.
    #[display("frame write to SPI device failed: {source}")]
    TransportWrite {
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
