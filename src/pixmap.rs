
//! CPU side RGBA images. Textures are decoded from png files into a `Pixmap`, or generated
//! procedurally when a demo is run without its asset files. Screenshots are encoded from one.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;
use png;
use rand::Rng;

use crate::color::Color;
use crate::error::{Error, Result};

/// A tightly packed 8-bit RGBA image. Rows are stored bottom to top, which is the order in which
/// OpenGL expects texture data.
#[derive(Debug, Clone, PartialEq)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Pixmap {
    /// A fully transparent black image
    pub fn new(width: u32, height: u32) -> Pixmap {
        Pixmap {
            width, height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    /// Wraps existing RGBA data. Fails if `data` does not hold exactly `width * height` pixels.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Pixmap> {
        if data.len() != (width * height * 4) as usize {
            return Err(Error::Image(format!(
                "{} bytes of data can not be a {}x{} RGBA image",
                data.len(), width, height,
            )));
        }
        Ok(Pixmap { width, height, data })
    }

    /// Creates an image where each pixel is given by `f(x, y)`. `(0, 0)` is the bottom left.
    pub fn generate<F>(width: u32, height: u32, mut f: F) -> Pixmap
      where F: FnMut(u32, u32) -> Color,
    {
        let mut pixmap = Pixmap::new(width, height);
        for y in 0..height {
            for x in 0..width {
                pixmap.set(x, y, f(x, y));
            }
        }
        pixmap
    }

    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.data[i .. i + 4].copy_from_slice(&color.to_u8());
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "({}, {}) is outside of a {}x{} pixmap", x, y, self.width, self.height);
        ((y * self.width + x) * 4) as usize
    }

    /// Reverses the order of the rows
    pub fn flip_vertical(&mut self) {
        let stride = (self.width * 4) as usize;
        let height = self.height as usize;

        for row in 0..height / 2 {
            let (top, bottom) = self.data.split_at_mut((height - row - 1) * stride);
            top[row * stride .. (row + 1) * stride].swap_with_slice(&mut bottom[..stride]);
        }
    }

    /// Decodes a png image. Grayscale, paletted and 16-bit images are converted to 8-bit RGBA.
    pub fn decode_png<R: Read>(reader: R) -> Result<Pixmap> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder.read_info()?;
        let mut buffer = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buffer)?;
        buffer.truncate(info.buffer_size());

        let pixels = (info.width * info.height) as usize;
        let data = match info.color_type {
            png::ColorType::Rgba => buffer,
            png::ColorType::Rgb => {
                let mut data = Vec::with_capacity(pixels * 4);
                for rgb in buffer.chunks(3) {
                    data.extend_from_slice(rgb);
                    data.push(255);
                }
                data
            },
            png::ColorType::GrayscaleAlpha => {
                let mut data = Vec::with_capacity(pixels * 4);
                for ga in buffer.chunks(2) {
                    data.extend_from_slice(&[ga[0], ga[0], ga[0], ga[1]]);
                }
                data
            },
            png::ColorType::Grayscale => {
                let mut data = Vec::with_capacity(pixels * 4);
                for &g in buffer.iter() {
                    data.extend_from_slice(&[g, g, g, 255]);
                }
                data
            },
            other => return Err(Error::Image(format!("Unsupported png color type {:?}", other))),
        };

        // png stores rows top to bottom
        let mut pixmap = Pixmap::from_rgba(info.width, info.height, data)?;
        pixmap.flip_vertical();
        Ok(pixmap)
    }

    pub fn encode_png<W: Write>(&self, writer: W) -> Result<()> {
        let mut flipped = self.clone();
        flipped.flip_vertical();

        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&flipped.data)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Pixmap> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| Error::io(path, err))?;
        let pixmap = Pixmap::decode_png(BufReader::new(file))?;

        debug!("Loaded {}x{} image from {}", pixmap.width, pixmap.height, path.display());
        Ok(pixmap)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|err| Error::io(path, err))?;
        self.encode_png(BufWriter::new(file))
    }
}

/// Procedural stand-ins for the texture files. All patterns tile seamlessly.
pub mod patterns {
    use super::*;

    /// Squares of `cell` pixels, alternating between `a` and `b`
    pub fn checkerboard(size: u32, cell: u32, a: Color, b: Color) -> Pixmap {
        let cell = cell.max(1);
        Pixmap::generate(size, size, |x, y| {
            if (x / cell + y / cell) % 2 == 0 { a } else { b }
        })
    }

    /// Rows of bricks with every other row offset by half a brick, separated by mortar lines
    pub fn bricks(size: u32, brick: Color, mortar: Color) -> Pixmap {
        let brick_height = (size / 4).max(2);
        let brick_width = brick_height * 2;
        let line = (size / 64).max(1);

        Pixmap::generate(size, size, |x, y| {
            let row = y / brick_height;
            let shifted = if row % 2 == 0 { x } else { x + brick_width / 2 };

            if y % brick_height < line || shifted % brick_width < line {
                mortar
            } else {
                // Slightly vary the color between bricks
                let id = row * 7 + shifted / brick_width * 13;
                brick.with_lightness(0.85 + (id % 5) as f32 * 0.05)
            }
        })
    }

    /// Random variations of `base`, like grass or dirt seen from above
    pub fn noise<R: Rng>(size: u32, base: Color, variation: f32, rng: &mut R) -> Pixmap {
        Pixmap::generate(size, size, |_, _| {
            base.with_lightness(1.0 + rng.gen_range(-variation ..= variation))
        })
    }

    /// Concentric rings around the center, like the end grain of a log
    pub fn wood(size: u32, light: Color, dark: Color, rings: f32) -> Pixmap {
        let center = size as f32 / 2.0;
        Pixmap::generate(size, size, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx*dx + dy*dy).sqrt() / center;

            let t = (distance * rings * std::f32::consts::PI).sin() * 0.5 + 0.5;
            light.lerp(dark, t)
        })
    }

    /// One row with a pixel for each color. Used as a lookup table, e.g. for cel shading.
    pub fn ramp(colors: &[Color]) -> Pixmap {
        let width = colors.len().max(1) as u32;
        Pixmap::generate(width, 1, |x, _| colors.get(x as usize).copied().unwrap_or(Color::BLACK))
    }

    /// A round spot of `color` which fades out towards its edge. Used for point sprites.
    pub fn glow(size: u32, color: Color) -> Pixmap {
        let center = size as f32 / 2.0;
        Pixmap::generate(size, size, |x, y| {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let distance = (dx*dx + dy*dy).sqrt() / center;

            let alpha = (1.0 - distance).max(0.0);
            color.with_alpha(alpha * alpha)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::patterns::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_rgba_checks_size() {
        assert!(Pixmap::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(Pixmap::from_rgba(2, 2, vec![0; 15]), Err(Error::Image(_))));
    }

    #[test]
    fn flip() {
        let mut pixmap = Pixmap::generate(1, 3, |_, y| Color::from_u8(y as u8, 0, 0, 255));
        pixmap.flip_vertical();

        assert_eq!([2, 0, 0, 255], pixmap.get(0, 0));
        assert_eq!([1, 0, 0, 255], pixmap.get(0, 1));
        assert_eq!([0, 0, 0, 255], pixmap.get(0, 2));
    }

    #[test]
    fn png_keeps_pixels() {
        let pixmap = Pixmap::generate(3, 2, |x, y| Color::from_u8(x as u8 * 80, y as u8 * 100, 7, 200));

        let mut encoded = Vec::new();
        pixmap.encode_png(&mut encoded).unwrap();
        assert_eq!(&encoded[1..4], b"PNG");

        let decoded = Pixmap::decode_png(&encoded[..]).unwrap();
        assert_eq!(pixmap, decoded);
    }

    #[test]
    fn invalid_png() {
        assert!(matches!(Pixmap::decode_png(&b"not a png"[..]), Err(Error::Decode(_))));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(Pixmap::load("does/not/exist.png"), Err(Error::Io { .. })));
    }

    #[test]
    fn checkerboard_alternates() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(1.0, 1.0, 1.0);
        let pixmap = checkerboard(8, 2, black, white);

        assert_eq!([0, 0, 0, 255], pixmap.get(0, 0));
        assert_eq!([0, 0, 0, 255], pixmap.get(1, 1));
        assert_eq!([255, 255, 255, 255], pixmap.get(2, 0));
        assert_eq!([255, 255, 255, 255], pixmap.get(0, 3));
        assert_eq!([0, 0, 0, 255], pixmap.get(3, 3));
    }

    #[test]
    fn bricks_have_mortar() {
        let mortar = Color::rgb(0.8, 0.8, 0.8);
        let pixmap = bricks(64, Color::rgb(0.6, 0.2, 0.1), mortar);

        assert_eq!(mortar.to_u8(), pixmap.get(10, 0));
        assert_ne!(mortar.to_u8(), pixmap.get(10, 5));
    }

    #[test]
    fn noise_is_seeded() {
        let base = Color::rgb(0.2, 0.6, 0.2);
        let a = noise(16, base, 0.2, &mut StdRng::seed_from_u64(1));
        let b = noise(16, base, 0.2, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn glow_fades_out() {
        let pixmap = glow(32, Color::rgb(1.0, 1.0, 1.0));

        assert!(pixmap.get(16, 16)[3] > 200);
        assert_eq!(0, pixmap.get(0, 0)[3]);
    }

    #[test]
    fn ramp_keeps_order() {
        let shades = [0, 32, 64, 128, 192].iter().map(|&g| Color::from_u8(0, g, 0, 255)).collect::<Vec<_>>();
        let pixmap = ramp(&shades);

        assert_eq!((5, 1), (pixmap.width, pixmap.height));
        assert_eq!([0, 0, 0, 255], pixmap.get(0, 0));
        assert_eq!([0, 192, 0, 255], pixmap.get(4, 0));
        assert_eq!((1, 1), { let empty = ramp(&[]); (empty.width, empty.height) });
    }

    #[test]
    fn wood_uses_both_colors() {
        let light = Color::rgb(1.0, 1.0, 1.0);
        let dark = Color::rgb(0.0, 0.0, 0.0);
        let pixmap = wood(64, light, dark, 4.0);

        let values = pixmap.data.chunks(4).map(|p| p[0]).collect::<Vec<_>>();
        assert!(values.iter().any(|&v| v < 30));
        assert!(values.iter().any(|&v| v > 225));
    }
}
