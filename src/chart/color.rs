//! Continuous color scales for the choropleth.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used by the renderer
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Viridis, sampled at ten evenly spaced stops
pub const VIRIDIS: [Rgb; 10] = [
    Rgb::new(0x44, 0x01, 0x54),
    Rgb::new(0x48, 0x28, 0x78),
    Rgb::new(0x3e, 0x49, 0x89),
    Rgb::new(0x31, 0x68, 0x8e),
    Rgb::new(0x26, 0x82, 0x8e),
    Rgb::new(0x1f, 0x9e, 0x89),
    Rgb::new(0x35, 0xb7, 0x79),
    Rgb::new(0x6e, 0xce, 0x58),
    Rgb::new(0xb5, 0xde, 0x2b),
    Rgb::new(0xfd, 0xe7, 0x25),
];

/// Named continuous color scales understood by the renderer
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScale {
    #[default]
    Viridis,
}

impl ColorScale {
    pub fn stops(&self) -> &'static [Rgb] {
        match self {
            ColorScale::Viridis => &VIRIDIS,
        }
    }

    /// Color at position `t` in `[0, 1]`; out-of-range and NaN are clamped
    pub fn sample(&self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let pos = t * (stops.len() - 1) as f64;
        let idx = pos.floor() as usize;
        if idx >= stops.len() - 1 {
            return stops[stops.len() - 1];
        }
        stops[idx].lerp(stops[idx + 1], pos - idx as f64)
    }
}

/// Closed interval of plotted values that the color scale spans
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Range covering `values`, or `None` when there are none
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, v| match range {
            None => Some(ValueRange { min: v, max: v }),
            Some(r) => Some(ValueRange {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Position of `value` within the range; a degenerate range maps to the middle
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.5
        } else {
            (value - self.min) / span
        }
    }
}
