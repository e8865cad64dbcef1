//! Bus transports that carry serialized frames to the panel.
//!
//! The driver is generic over [`Transport`] so tests (and ports to other
//! buses) can substitute their own implementation. The real panel sits on a
//! Linux SPI device; [`SpiTransport`] (feature `hardware`) covers that case.

use crate::Result;

/// A write-only channel to the physical display.
///
/// One call to [`send`](Self::send) carries one complete wire frame. The
/// write is atomic from the driver's point of view: it either succeeds
/// entirely or fails with a transport error and the frame is not considered
/// sent.
pub trait Transport {
    /// Write one serialized frame to the device, blocking until the
    /// underlying bus accepts it.
    fn send(&mut self, frame: &[u8]) -> Result<()>;
}

#[cfg(feature = "hardware")]
pub use self::spi::SpiTransport;

#[cfg(feature = "hardware")]
mod spi {
    use std::io::Write;

    use log::debug;
    use spidev::{SpiModeFlags, Spidev, SpidevOptions};

    use crate::{Error, Result};

    /// SPI clock the panel's onboard controller expects.
    const SPI_CLOCK_HZ: u32 = 9_000_000;

    /// [`Transport`](super::Transport) backed by a Linux `spidev` device.
    ///
    /// The device handle is opened and configured once at construction and
    /// owned exclusively for the life of the transport.
    pub struct SpiTransport {
        device: String,
        spi: Spidev,
    }

    impl SpiTransport {
        /// Open and configure the named SPI device, e.g. `/dev/spidev0.0`.
        pub fn open(device: &str) -> Result<Self> {
            let open_error = |source| Error::TransportOpen {
                device: device.to_owned(),
                source,
            };
            let mut spi = Spidev::open(device).map_err(open_error)?;
            let options = SpidevOptions::new()
                .bits_per_word(8)
                .max_speed_hz(SPI_CLOCK_HZ)
                .mode(SpiModeFlags::SPI_MODE_0)
                .build();
            spi.configure(&options).map_err(open_error)?;
            debug!("opened SPI device `{device}` at {SPI_CLOCK_HZ} Hz");
            Ok(Self {
                device: device.to_owned(),
                spi,
            })
        }

        /// Path of the underlying SPI device.
        #[must_use]
        pub fn device(&self) -> &str {
            &self.device
        }
    }

    impl super::Transport for SpiTransport {
        fn send(&mut self, frame: &[u8]) -> Result<()> {
            self.spi
                .write_all(frame)
                .map_err(|source| Error::TransportWrite { source })
        }
    }
}
