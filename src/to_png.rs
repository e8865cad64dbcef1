#![cfg(feature = "preview")]
//! PNG previews of frame buffers, for checking output without hardware.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};

use crate::frame::Frame2d;

/// Render a frame into an RGB PNG with one `cell_size`×`cell_size` square
/// per LED. Parent directories are created as needed.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    output_path: impl AsRef<Path>,
    cell_size: u32,
) -> Result<(), Box<dyn Error>> {
    assert!(cell_size > 0, "cell_size must be positive");
    let output_path = output_path.as_ref();
    let width = W as u32 * cell_size;
    let height = H as u32 * cell_size;
    let mut bytes = vec![0_u8; (width * height * 3) as usize];

    for (row_index, row) in frame.iter().enumerate() {
        for (column_index, pixel) in row.iter().enumerate() {
            let cell_origin_x = column_index as u32 * cell_size;
            let cell_origin_y = row_index as u32 * cell_size;
            for local_y in 0..cell_size {
                for local_x in 0..cell_size {
                    let x = cell_origin_x + local_x;
                    let y = cell_origin_y + local_y;
                    let pixel_index = ((y * width + x) * 3) as usize;
                    bytes[pixel_index] = pixel.r;
                    bytes[pixel_index + 1] = pixel.g;
                    bytes[pixel_index + 2] = pixel.b;
                }
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&bytes)?;
    writer.finish()?;
    Ok(())
}
