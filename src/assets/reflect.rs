//! One-time preprocessing of a raw cover image into the surface the renderer consumes.
//!
//! Output layout for a `w x h` cell is `w x 2h`: a `h/3` band of background,
//! the scaled cover, then its vertical mirror fading toward black until the
//! bottom edge clips it.

use image::{Rgba, RgbaImage, imageops::FilterType};

use crate::{
    assets::visual::CoverVisual,
    foundation::{
        core::BLACK,
        error::{CoverflowError, CoverflowResult},
    },
};

/// Scale `image` into a `cell_width x cell_height` cell and stack its faded reflection below it.
pub fn prepare_cover(
    image: &RgbaImage,
    cell_width: u32,
    cell_height: u32,
) -> CoverflowResult<CoverVisual> {
    if cell_width == 0 || cell_height == 0 {
        return Err(CoverflowError::validation(format!(
            "cover cell must be non-empty, got {cell_width}x{cell_height}"
        )));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(CoverflowError::asset("cover image has no pixels"));
    }

    let mut scaled =
        image::imageops::resize(image, cell_width, cell_height, FilterType::CatmullRom);
    flatten_onto_black(&mut scaled);

    let out_height = cell_height * 2;
    let padding = cell_height / 3;
    let seam = padding + cell_height;
    let mut out = RgbaImage::from_pixel(cell_width, out_height, Rgba(BLACK));

    for y in 0..cell_height {
        let upright = padding + y;
        let mirrored = seam + y;
        for x in 0..cell_width {
            if upright < out_height {
                out.put_pixel(x, upright, *scaled.get_pixel(x, y));
            }
            if mirrored < out_height {
                out.put_pixel(x, mirrored, *scaled.get_pixel(x, cell_height - 1 - y));
            }
        }
    }

    let reflection_rows = out_height - seam;
    for y in seam..out_height {
        let remaining = out_height - y;
        for x in 0..cell_width {
            let px = out.get_pixel_mut(x, y);
            for c in &mut px.0[..3] {
                *c = (u32::from(*c) * remaining / reflection_rows).min(255) as u8;
            }
        }
    }

    Ok(CoverVisual::from_rgba_image(&out))
}

/// Stand-in artwork for covers whose image could not be loaded: a dark-to-light
/// diagonal gradient inside a grey frame, preprocessed like any other cover.
pub fn placeholder_cover(cell_width: u32, cell_height: u32) -> CoverflowResult<CoverVisual> {
    prepare_cover(
        &placeholder_image(cell_width.max(1), cell_height.max(1)),
        cell_width,
        cell_height,
    )
}

fn placeholder_image(width: u32, height: u32) -> RgbaImage {
    const FRAME: [u8; 4] = [64, 64, 64, 255];
    const FRAME_PX: u32 = 4;

    // Gradient axis from (40% w, 0) to (60% w, h).
    let (x0, y0) = (f64::from(width) * 0.4, 0.0);
    let (dx, dy) = (f64::from(width) * 0.2, f64::from(height));
    let len2 = (dx * dx + dy * dy).max(f64::EPSILON);

    RgbaImage::from_fn(width, height, |x, y| {
        let on_frame = x < FRAME_PX
            || y < FRAME_PX
            || x + FRAME_PX >= width
            || y + FRAME_PX >= height;
        if on_frame {
            return Rgba(FRAME);
        }
        let t = ((f64::from(x) - x0) * dx + (f64::from(y) - y0) * dy) / len2;
        let v = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([v, v, v, 255])
    })
}

fn flatten_onto_black(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        let a = u16::from(px.0[3]);
        for c in &mut px.0[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
        px.0[3] = 255;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/reflect.rs"]
mod tests;
