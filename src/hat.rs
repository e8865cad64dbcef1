//! The Unicorn HAT HD device abstraction.
//!
//! [`UnicornHatHd`] owns the frame buffer, the brightness scalar, and the
//! bus transport. Pixel operations are pure buffer mutations; nothing
//! reaches the panel until [`show`](UnicornHatHd::show) is called.

use log::trace;
use smart_leds::{RGB8, colors};

use crate::Result;
use crate::frame::Frame2d;
#[cfg(feature = "hardware")]
use crate::transport::SpiTransport;
use crate::transport::Transport;

/// Panel width in pixels.
pub const WIDTH: usize = 16;
/// Panel height in pixels.
pub const HEIGHT: usize = 16;
/// Brightness used when none is given at construction.
pub const DEFAULT_BRIGHTNESS: f32 = 0.5;

/// Command byte that starts every wire frame.
const SOF: u8 = 0x72;
/// Size of one serialized wire frame: command byte + 16×16 RGB payload.
pub const WIRE_FRAME_LEN: usize = 1 + WIDTH * HEIGHT * 3;

/// Frame buffer sized for the Unicorn HAT HD panel.
pub type HatFrame = Frame2d<WIDTH, HEIGHT>;

/// Driver for a single Unicorn HAT HD panel.
///
/// Coordinates are `(x, y)` with each axis in `[0, 15]`; out-of-range
/// coordinates panic. Brightness is a plain multiplier applied per channel
/// at [`show`](Self::show) time only — it is deliberately unvalidated, so
/// values outside `[0.0, 1.0]` scale (and saturate) the wire bytes
/// accordingly without touching the stored pixels.
///
/// The driver is single-threaded: no operation is designed to run
/// concurrently with another on the same instance.
pub struct UnicornHatHd<T> {
    transport: T,
    frame: HatFrame,
    brightness: f32,
}

impl<T: Transport> UnicornHatHd<T> {
    /// Create a driver over the given transport with an all-black frame and
    /// [`DEFAULT_BRIGHTNESS`].
    pub fn new(transport: T) -> Self {
        Self::with_brightness(transport, DEFAULT_BRIGHTNESS)
    }

    /// Create a driver over the given transport with an explicit brightness.
    pub fn with_brightness(transport: T, brightness: f32) -> Self {
        Self {
            transport,
            frame: HatFrame::new(),
            brightness,
        }
    }

    /// Current brightness scalar.
    #[must_use]
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Set the brightness scalar. Takes effect at the next [`show`](Self::show).
    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    /// Stored color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside `[0, 15]`.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> RGB8 {
        self.frame[(x, y)]
    }

    /// Set the pixel at `(x, y)`, overwriting any previous value. Buffer
    /// only; does not touch the bus.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside `[0, 15]`.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: RGB8) {
        self.frame[(x, y)] = color;
    }

    /// Set every pixel to the given color.
    pub fn fill(&mut self, color: RGB8) {
        self.frame.fill(color);
    }

    /// Set every pixel to black.
    pub fn clear(&mut self) {
        self.fill(colors::BLACK);
    }

    /// Borrow the frame buffer, e.g. for embedded-graphics drawing.
    #[must_use]
    pub const fn frame(&self) -> &HatFrame {
        &self.frame
    }

    /// Mutably borrow the frame buffer.
    pub fn frame_mut(&mut self) -> &mut HatFrame {
        &mut self.frame
    }

    /// Serialize the frame buffer and write it to the panel.
    ///
    /// The wire frame is the command byte `0x72` followed by the pixels in
    /// row order (`y` outer, `x` inner), three bytes `(r, g, b)` per pixel,
    /// each channel scaled by the brightness scalar. A transport failure
    /// surfaces as [`Error::TransportWrite`](crate::Error::TransportWrite);
    /// the frame is then not considered sent and no retry is attempted.
    pub fn show(&mut self) -> Result<()> {
        let wire = self.encode();
        trace!("flushing frame ({WIRE_FRAME_LEN} bytes, brightness {})", self.brightness);
        self.transport.send(&wire)
    }

    fn encode(&self) -> [u8; WIRE_FRAME_LEN] {
        let mut wire = [0_u8; WIRE_FRAME_LEN];
        wire[0] = SOF;
        let mut offset = 1;
        for row in self.frame.iter() {
            for pixel in row {
                wire[offset] = scale_channel(pixel.r, self.brightness);
                wire[offset + 1] = scale_channel(pixel.g, self.brightness);
                wire[offset + 2] = scale_channel(pixel.b, self.brightness);
                offset += 3;
            }
        }
        wire
    }
}

#[cfg(feature = "hardware")]
impl UnicornHatHd<SpiTransport> {
    /// Open the named SPI device (e.g. `/dev/spidev0.0`) with
    /// [`DEFAULT_BRIGHTNESS`].
    pub fn open(device: &str) -> Result<Self> {
        Ok(Self::new(SpiTransport::open(device)?))
    }

    /// Open the named SPI device with an explicit brightness.
    pub fn open_with_brightness(device: &str, brightness: f32) -> Result<Self> {
        Ok(Self::with_brightness(SpiTransport::open(device)?, brightness))
    }
}

/// Scale one channel by the brightness scalar: truncation toward zero,
/// saturating to `[0, 255]` (both fall out of the `as` cast).
fn scale_channel(channel: u8, brightness: f32) -> u8 {
    (f32::from(channel) * brightness) as u8
}
