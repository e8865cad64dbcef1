//! Host-side driver for the [Pimoroni Unicorn HAT HD], a 16×16 RGB LED
//! matrix driven over SPI.
//!
//! The driver owns an in-memory [`Frame2d`] pixel buffer and a brightness
//! scalar. Pixel writes only touch the buffer; [`UnicornHatHd::show`]
//! serializes the buffer into the panel's wire format (one command byte
//! followed by 768 brightness-scaled RGB bytes) and pushes it through a
//! [`Transport`] in a single blocking write.
//!
//! [Pimoroni Unicorn HAT HD]: https://shop.pimoroni.com/products/unicorn-hat-hd
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "hardware")]
//! # fn main() -> unicorn_hat_hd::Result<()> {
//! use unicorn_hat_hd::{UnicornHatHd, colors};
//!
//! // Opens /dev/spidev0.0 and starts with an all-black frame.
//! let mut hat = UnicornHatHd::open("/dev/spidev0.0")?;
//!
//! hat.set_pixel(0, 0, colors::RED);
//! hat.set_brightness(0.8);
//! hat.show()?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "hardware"))]
//! # fn main() {}
//! ```
//!
//! The `hardware` feature pulls in the Linux `spidev` transport. Without it
//! the crate still builds everywhere and any [`Transport`] implementation
//! can stand in for the bus, which is how the test suite runs.

mod error;
pub mod frame;
pub mod hat;
#[cfg(feature = "preview")]
pub mod to_png;
pub mod transport;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
pub use crate::frame::Frame2d;
pub use crate::hat::{DEFAULT_BRIGHTNESS, HEIGHT, HatFrame, UnicornHatHd, WIDTH, WIRE_FRAME_LEN};
#[cfg(feature = "hardware")]
pub use crate::transport::SpiTransport;
pub use crate::transport::Transport;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color type used by the frame buffer.
pub use smart_leds::RGB8;
