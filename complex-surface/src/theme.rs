use anyhow::{anyhow, Error};
use plotters::style::RGBColor;
use std::fmt;
use std::str::FromStr;

/// Visual style of a render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Canvas colour; keyed out to transparent when the image is written
    pub fn background(self) -> RGBColor {
        match self {
            Theme::Light => RGBColor(255, 255, 255),
            Theme::Dark => RGBColor(0, 0, 0),
        }
    }

    /// Title, axes and grid colour
    pub fn foreground(self) -> RGBColor {
        match self {
            Theme::Light => RGBColor(0, 0, 0),
            Theme::Dark => RGBColor(255, 255, 255),
        }
    }

    pub fn surface_gradient(self) -> Box<dyn colorgrad::Gradient> {
        match self {
            Theme::Light => Box::new(colorgrad::preset::viridis()),
            Theme::Dark => Box::new(colorgrad::preset::plasma()),
        }
    }

    pub fn file_name(self) -> String {
        format!("z2.{}.png", self.name())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow!(
                "Invalid theme '{}'. Must be one of: {:?}",
                other,
                Theme::ALL.map(Theme::name)
            )),
        }
    }
}
