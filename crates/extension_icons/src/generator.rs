//! Renders the placeholder icons: a white glyph centered on a solid blue
//! square, encoded as PNG.

use std::fs;
use std::path::PathBuf;

use ab_glyph::{Font, FontVec, PxScale};
use image::{Rgb, RgbImage};

use crate::{FontPolicy, IconError, IconResult, ResolvedFont, BUILTIN_GLYPH_HEIGHT, BUILTIN_GLYPH_K, BUILTIN_GLYPH_WIDTH};

/// Icon sizes required by the extension manifest.
pub const SIZES: [u32; 3] = [16, 48, 128];

/// The rendered character.
pub const GLYPH: char = 'K';

/// Twitter blue (#1DA1F2).
pub const BACKGROUND: Rgb<u8> = Rgb([29, 161, 242]);

pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Renders one square icon per requested size into `out_dir`.
///
/// Calls are independent and idempotent: re-generating a size overwrites the
/// previous file with identical bytes (given a stable font resolution).
pub struct IconGenerator {
    out_dir: PathBuf,
    font_policy: FontPolicy,
}

impl Default for IconGenerator {
    fn default() -> Self {
        Self::new(PathBuf::from("icons"), FontPolicy::default())
    }
}

impl IconGenerator {
    pub fn new(out_dir: PathBuf, font_policy: FontPolicy) -> Self {
        Self { out_dir, font_policy }
    }

    /// Render one `size`x`size` icon and write it to `out_dir/icon{size}.png`,
    /// creating the directory if needed and overwriting any existing file.
    /// Returns the path of the written file.
    ///
    /// Font problems degrade to the builtin glyph; everything else is fatal.
    pub fn generate(&self, size: u32) -> IconResult<PathBuf> {
        if size == 0 {
            return Err(IconError::InvalidSize { size });
        }

        let mut img = RgbImage::from_pixel(size, size, BACKGROUND);

        let font_px = (size as f32 * 0.6).floor();
        match self.font_policy.resolve() {
            ResolvedFont::Outline(font) => draw_outline_glyph(&mut img, &font, font_px),
            ResolvedFont::Builtin => draw_builtin_glyph(&mut img),
        }

        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join(format!("icon{size}.png"));
        img.save(&path)?;
        Ok(path)
    }
}

/// Centering offset for one axis, using the same integer floor division as
/// the original tool. Bounding-box asymmetry is deliberately not corrected
/// for, so the glyph may sit slightly off-center depending on font metrics.
fn center_offset(canvas: u32, extent: i32) -> i32 {
    (canvas as i32 - extent).div_euclid(2)
}

fn draw_outline_glyph(img: &mut RgbImage, font: &FontVec, font_px: f32) {
    let size = img.width();
    let scale = PxScale::from(font_px);
    let glyph = font.glyph_id(GLYPH).with_scale_and_position(scale, ab_glyph::point(0.0, 0.0));
    let Some(outlined) = font.outline_glyph(glyph) else {
        // A font without an outline for the glyph behaves like a load failure.
        log::warn!("font has no outline for {GLYPH:?}, using builtin glyph");
        draw_builtin_glyph(img);
        return;
    };

    let bounds = outlined.px_bounds();
    let x = center_offset(size, bounds.width().ceil() as i32);
    let y = center_offset(size, bounds.height().ceil() as i32);

    outlined.draw(|px, py, coverage| {
        let dst_x = x + px as i32;
        let dst_y = y + py as i32;
        if (0..size as i32).contains(&dst_x) && (0..size as i32).contains(&dst_y) {
            let pixel = img.get_pixel_mut(dst_x as u32, dst_y as u32);
            *pixel = blend(*pixel, FOREGROUND, coverage);
        }
    });
}

/// Draws the 8x16 bitmap glyph at 1:1 pixel scale. The fallback is
/// size-independent, so it comes out small on the larger icons.
fn draw_builtin_glyph(img: &mut RgbImage) {
    let size = img.width();
    let x = center_offset(size, BUILTIN_GLYPH_WIDTH as i32);
    let y = center_offset(size, BUILTIN_GLYPH_HEIGHT as i32);

    for (row, bits) in BUILTIN_GLYPH_K.iter().enumerate() {
        for col in 0..BUILTIN_GLYPH_WIDTH {
            if bits & (0x80 >> col) == 0 {
                continue;
            }
            let dst_x = x + col as i32;
            let dst_y = y + row as i32;
            if (0..size as i32).contains(&dst_x) && (0..size as i32).contains(&dst_y) {
                img.put_pixel(dst_x as u32, dst_y as u32, FOREGROUND);
            }
        }
    }
}

fn blend(bg: Rgb<u8>, fg: Rgb<u8>, coverage: f32) -> Rgb<u8> {
    let a = coverage.clamp(0.0, 1.0);
    let mix = |b: u8, f: u8| (f32::from(b) * (1.0 - a) + f32::from(f) * a).round() as u8;
    Rgb([mix(bg.0[0], fg.0[0]), mix(bg.0[1], fg.0[1]), mix(bg.0[2], fg.0[2])])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        let generator = IconGenerator::default();
        assert!(matches!(generator.generate(0), Err(IconError::InvalidSize { size: 0 })));
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(BACKGROUND, FOREGROUND, 0.0), BACKGROUND);
        assert_eq!(blend(BACKGROUND, FOREGROUND, 1.0), FOREGROUND);
    }

    #[test]
    fn center_offset_floors() {
        assert_eq!(center_offset(16, 8), 4);
        assert_eq!(center_offset(16, 9), 3);
        assert_eq!(center_offset(16, 16), 0);
        assert_eq!(center_offset(16, 17), -1);
    }

    #[test]
    fn builtin_glyph_lands_inside_the_smallest_canvas() {
        let mut img = RgbImage::from_pixel(16, 16, BACKGROUND);
        draw_builtin_glyph(&mut img);
        // 8x16 glyph on a 16x16 canvas: columns 4..12, full height.
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(15, 15), BACKGROUND);
        let white = img.pixels().filter(|p| **p == FOREGROUND).count();
        assert!(white > 0, "glyph should have drawn some pixels");
    }
}
