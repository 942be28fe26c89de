use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

use crossterm::{cursor, queue};
use image::{ImageOutputFormat, Rgba, RgbaImage};

use crate::error::{Error, Result};
use crate::film::Film;
use crate::math::RGBColor;

/// Writes the film as one colored glyph per pixel, starting from the top-left
/// corner of the terminal with the cursor hidden.
pub fn push_terminal<W: Write>(film: &Film<RGBColor>, out: &mut W) -> io::Result<()> {
    queue!(out, cursor::Hide, cursor::MoveTo(0, 0))?;
    for row in film.rows() {
        let mut line = String::with_capacity(row.len() * 24 + 1);
        for pixel in row {
            line.push_str(&pixel.to_ansi_glyph());
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}

pub fn to_image(film: &Film<RGBColor>) -> Result<RgbaImage> {
    let too_large = || Error::ImageTooLarge {
        width: film.width,
        height: film.height,
    };
    let width = u32::try_from(film.width).map_err(|_| too_large())?;
    let height = u32::try_from(film.height).map_err(|_| too_large())?;
    Ok(RgbaImage::from_fn(width, height, |x, y| {
        Rgba(film.at(x as usize, y as usize).to_rgba8())
    }))
}

pub fn encode_png<W: Write + Seek>(film: &Film<RGBColor>, out: &mut W) -> Result<()> {
    to_image(film)?.write_to(out, ImageOutputFormat::Png)?;
    Ok(())
}

pub fn write_png(film: &Film<RGBColor>, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    encode_png(film, &mut writer)?;
    writer.flush()?;
    Ok(())
}
