//! Scrolling rainbow across the whole panel.
//!
//! ```sh
//! cargo run --bin demo_rainbow --features hardware
//! ```

use std::thread;
use std::time::Duration;

use smart_leds::hsv::{Hsv, hsv2rgb};
use unicorn_hat_hd::{HEIGHT, Result, UnicornHatHd, WIDTH};

const DEVICE: &str = "/dev/spidev0.0";

fn main() -> Result<()> {
    env_logger::init();
    let mut hat = UnicornHatHd::open(DEVICE)?;

    let mut step: u8 = 0;
    loop {
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let hue = step.wrapping_add(((x + y) * 4) as u8);
                hat.set_pixel(
                    x,
                    y,
                    hsv2rgb(Hsv {
                        hue,
                        sat: 255,
                        val: 255,
                    }),
                );
            }
        }
        hat.show()?;
        step = step.wrapping_add(1);
        thread::sleep(Duration::from_millis(33));
    }
}
