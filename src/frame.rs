//! In-memory 2-D pixel buffer for rectangular RGB LED panels.
//!
//! [`Frame2d`] stores one [`RGB8`] per LED and implements the
//! [`embedded-graphics`](https://docs.rs/embedded-graphics) [`DrawTarget`]
//! trait, so shapes and raw pixel access can be mixed freely:
//!
//! ```rust
//! use embedded_graphics::{
//!     pixelcolor::Rgb888,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use unicorn_hat_hd::{HatFrame, colors};
//!
//! let mut frame = HatFrame::new();
//!
//! // Red border around the edge of the panel.
//! Rectangle::new(HatFrame::TOP_LEFT, HatFrame::SIZE)
//!     .into_styled(PrimitiveStyle::with_stroke(Rgb888::RED, 1))
//!     .draw(&mut frame)
//!     .expect("drawing into frame cannot fail");
//!
//! // Direct pixel access: (x, y) indexing.
//! frame[(0, 0)] = colors::CYAN;
//! ```

use core::convert::Infallible;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use embedded_graphics::{draw_target::DrawTarget, prelude::*};
use smart_leds::RGB8;

/// 8-bit-per-channel RGB color from `embedded_graphics`, used when drawing
/// into a frame.
#[doc(inline)]
pub use embedded_graphics::pixelcolor::Rgb888;

/// Convert [`RGB8`] (smart-leds) to [`Rgb888`] (embedded-graphics).
#[must_use]
pub const fn rgb8_to_rgb888(color: RGB8) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Convert [`Rgb888`] (embedded-graphics) to [`RGB8`] (smart-leds).
#[must_use]
pub fn rgb888_to_rgb8(color: Rgb888) -> RGB8 {
    RGB8::new(color.r(), color.g(), color.b())
}

/// A W×H pixel buffer, indexed by `(x, y)` with `(0, 0)` at the top left.
///
/// Rows are stored contiguously, so the raw layout (via [`Deref`]) is
/// `[[RGB8; W]; H]` addressed `[y][x]`. Colors are plain values; filling the
/// frame copies the color into every cell, never aliases it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Frame width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Frame height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Total number of pixels (WIDTH × HEIGHT).
    pub const LEN: usize = W * H;
    /// Frame dimensions as a [`Size`], for embedded-graphics drawing.
    pub const SIZE: Size = Size::new(W as u32, H as u32);
    /// Top-left corner coordinate as a [`Point`], for embedded-graphics drawing.
    pub const TOP_LEFT: Point = Point::new(0, 0);

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[RGB8::new(0, 0, 0); W]; H])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([[color; W]; H])
    }

    /// Set every pixel to the given color.
    pub fn fill(&mut self, color: RGB8) {
        for row in &mut self.0 {
            row.fill(color);
        }
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for Frame2d<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Frame2d<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for Frame2d<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> From<[[RGB8; W]; H]> for Frame2d<W, H> {
    fn from(array: [[RGB8; W]; H]) -> Self {
        Self(array)
    }
}

impl<const W: usize, const H: usize> From<Frame2d<W, H>> for [[RGB8; W]; H] {
    fn from(frame: Frame2d<W, H>) -> Self {
        frame.0
    }
}

impl<const W: usize, const H: usize> Default for Frame2d<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Frame2d<W, H> {
    fn size(&self) -> Size {
        Size::new(W as u32, H as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for Frame2d<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let x_index = coord.x;
            let y_index = coord.y;
            if x_index >= 0 && x_index < W as i32 && y_index >= 0 && y_index < H as i32 {
                self.0[y_index as usize][x_index as usize] = rgb888_to_rgb8(color);
            }
        }
        Ok(())
    }
}
