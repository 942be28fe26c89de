use std::{convert::Infallible, fmt, path::PathBuf, str::FromStr};

use structopt::StructOpt;

use crate::error::{Error, Result};
use crate::math::RGBColor;

#[derive(Debug, StructOpt)]
#[structopt(name = "phong_rt", about = "Renders spheres to the terminal or to a PNG file.")]
pub struct Opt {
    /// Width of the render target. Defaults to the terminal width when
    /// rendering to the terminal.
    #[structopt(long)]
    pub width: Option<usize>,

    /// Height of the render target. Defaults to the terminal height when
    /// rendering to the terminal.
    #[structopt(long)]
    pub height: Option<usize>,

    /// Output PNG path, or `-` for the terminal.
    #[structopt(long, default_value = "-")]
    pub target: Target,

    /// Render threads, defaults to the number of CPUs.
    #[structopt(long)]
    pub threads: Option<usize>,

    /// Draw a progress bar on stderr.
    #[structopt(long)]
    pub progress: bool,
}

impl Opt {
    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }

    /// Explicit dimensions, falling back to the terminal size when the
    /// target is the terminal. One row is left free for the timing line.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        match (self.width, self.height, &self.target) {
            (Some(width), Some(height), _) => Ok((width, height)),
            (width, height, Target::Terminal) => {
                let (columns, rows) = crossterm::terminal::size()?;
                Ok((
                    width.unwrap_or(columns as usize),
                    height.unwrap_or((rows as usize).saturating_sub(1)),
                ))
            }
            _ => Err(Error::MissingDimensions),
        }
    }

    pub fn settings(&self) -> Result<RenderSettings> {
        let (width, height) = self.dimensions()?;
        RenderSettings::new(width, height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Target {
    Terminal,
    Png(PathBuf),
}

impl FromStr for Target {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "-" => Target::Terminal,
            path => Target::Png(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Terminal => write!(f, "terminal"),
            Target::Png(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated render parameters. The fields stay private so the positive
/// width, height and sample count checked at construction cannot be undone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    width: usize,
    height: usize,
    samples: usize,
    max_depth: usize,
    background: RGBColor,
}

impl RenderSettings {
    pub const SAMPLES: usize = 3;
    pub const MAX_DEPTH: usize = 4;

    pub fn new(width: usize, height: usize) -> Result<RenderSettings> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(RenderSettings {
            width,
            height,
            samples: RenderSettings::SAMPLES,
            max_depth: RenderSettings::MAX_DEPTH,
            background: RGBColor::BLACK,
        })
    }

    pub fn with_background(mut self, background: RGBColor) -> Self {
        self.background = background;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sub-samples per pixel side. Zero is raised to one.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(1);
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Sub-samples per pixel side, `samples * samples` rays per pixel.
    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn background(&self) -> RGBColor {
        self.background
    }

    /// Height over width, used to size the image plane.
    pub fn aspect_ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }
}
