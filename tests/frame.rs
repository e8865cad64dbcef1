#![allow(missing_docs)]
//! Host-level tests for the frame buffer.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use smart_leds::RGB8;
use unicorn_hat_hd::frame::{Frame2d, rgb8_to_rgb888, rgb888_to_rgb8};
use unicorn_hat_hd::{HatFrame, colors};

#[test]
fn new_frame_is_all_black() {
    let frame = HatFrame::new();
    for y in 0..HatFrame::HEIGHT {
        for x in 0..HatFrame::WIDTH {
            assert_eq!(frame[(x, y)], colors::BLACK);
        }
    }
}

#[test]
fn filled_frame_holds_given_color() {
    let frame = Frame2d::<3, 2>::filled(colors::MAGENTA);
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(frame[(x, y)], colors::MAGENTA);
        }
    }
}

#[test]
fn fill_overwrites_previous_contents() {
    let mut frame = HatFrame::new();
    frame[(5, 9)] = colors::RED;

    frame.fill(colors::CYAN);

    for y in 0..HatFrame::HEIGHT {
        for x in 0..HatFrame::WIDTH {
            assert_eq!(frame[(x, y)], colors::CYAN);
        }
    }
}

#[test]
fn fill_copies_color_by_value() {
    let mut frame = Frame2d::<2, 2>::new();
    frame.fill(colors::WHITE);

    // Mutating one cell must not leak into its neighbors.
    frame[(0, 0)] = colors::RED;

    assert_eq!(frame[(0, 0)], colors::RED);
    assert_eq!(frame[(1, 0)], colors::WHITE);
    assert_eq!(frame[(0, 1)], colors::WHITE);
    assert_eq!(frame[(1, 1)], colors::WHITE);
}

#[test]
fn index_round_trip_over_every_coordinate() {
    let mut frame = HatFrame::new();
    for y in 0..HatFrame::HEIGHT {
        for x in 0..HatFrame::WIDTH {
            let color = RGB8::new(x as u8, y as u8, (x + y) as u8);
            frame[(x, y)] = color;
            assert_eq!(frame[(x, y)], color);
        }
    }
}

#[test]
fn index_is_x_then_y() {
    let mut frame = Frame2d::<3, 2>::new();
    frame[(2, 1)] = colors::BLUE;

    // Raw storage is [row][column], i.e. [y][x].
    assert_eq!(frame.0[1][2], colors::BLUE);
}

#[test]
#[should_panic(expected = "x_index must be within width")]
fn x_out_of_range_panics() {
    let frame = HatFrame::new();
    let _ = frame[(16, 0)];
}

#[test]
#[should_panic(expected = "y_index must be within height")]
fn y_out_of_range_panics() {
    let frame = HatFrame::new();
    let _ = frame[(0, 16)];
}

#[test]
fn draw_target_draws_and_clips() {
    let mut frame = HatFrame::new();

    Rectangle::new(Point::new(14, 14), Size::new(10, 10))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::GREEN))
        .draw(&mut frame)
        .expect("drawing into frame cannot fail");

    // Inside the panel the rectangle landed. (Rgb888::GREEN is full green,
    // unlike the CSS `colors::GREEN` constant.)
    let full_green = RGB8::new(0, 255, 0);
    assert_eq!(frame[(14, 14)], full_green);
    assert_eq!(frame[(15, 15)], full_green);
    // Neighbors outside the rectangle stayed black.
    assert_eq!(frame[(13, 13)], colors::BLACK);
}

#[test]
fn rgb8_rgb888_conversions_match() {
    let rgb8_color = RGB8::new(16, 32, 48);
    let rgb888_color = Rgb888::new(16, 32, 48);

    assert_eq!(rgb8_to_rgb888(rgb8_color), rgb888_color);
    assert_eq!(rgb888_to_rgb8(rgb888_color), rgb8_color);
}
