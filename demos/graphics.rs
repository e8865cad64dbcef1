//! Draw shapes onto the panel with embedded-graphics.
//!
//! ```sh
//! cargo run --bin demo_graphics --features hardware
//! ```

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
};
use unicorn_hat_hd::{HatFrame, Result, UnicornHatHd};

const DEVICE: &str = "/dev/spidev0.0";

fn main() -> Result<()> {
    env_logger::init();
    let mut hat = UnicornHatHd::open(DEVICE)?;

    // Red border around the edge of the panel.
    Rectangle::new(HatFrame::TOP_LEFT, HatFrame::SIZE)
        .into_styled(PrimitiveStyle::with_stroke(Rgb888::RED, 1))
        .draw(hat.frame_mut())
        .expect("drawing into frame cannot fail");

    // Green circle centered in the frame.
    Circle::new(Point::new(4, 4), 8)
        .into_styled(PrimitiveStyle::with_stroke(Rgb888::GREEN, 1))
        .draw(hat.frame_mut())
        .expect("drawing into frame cannot fail");

    hat.show()
}
