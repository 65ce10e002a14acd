//! Visual encoding of the quake data.
//!
//! - depth is mapped onto a two-color scale, interpolated in OKLab over `[-10, 90]` km and
//!   clamped outside;
//! - magnitude is mapped linearly onto a radius in meters.
//!
//! OKLab conversion constants are from Björn Ottosson's reference
//! <https://bottosson.github.io/posts/oklab/>.
//!

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Depth domain of the color scale, in km.
pub const DEPTH_DOMAIN: (f64, f64) = (-10., 90.);

/// CSS `lightgreen`, shallow quakes.
pub const SHALLOW: Rgb = Rgb::new(0x90, 0xee, 0x90);
/// CSS `salmon`, deep quakes.
pub const DEEP: Rgb = Rgb::new(0xfa, 0x80, 0x72);

/// Radius of a magnitude 0 quake, in meters.
pub const BASE_RADIUS: f64 = 10_000.;
/// Added radius per magnitude unit, in meters.
pub const RADIUS_SCALE: f64 = 50_000.;
/// Nothing is drawn smaller than this, whatever the magnitude.
pub const MIN_RADIUS: f64 = 1_000.;

/// Lower bounds of the legend bands, the last one is open-ended.
pub const DEPTH_GRADES: [f64; 6] = [-10., 10., 30., 50., 70., 90.];

/// Plain 8-bit sRGB color, serialized as `#rrggbb`.
///
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// A color in the OKLab space, where euclidean distance follows perceived difference.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oklab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

#[inline]
fn to_linear(c: u8) -> f64 {
    let c = c as f64 / 255.;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn from_linear(c: f64) -> u8 {
    let c = if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1. / 2.4) - 0.055
    };
    (c.clamp(0., 1.) * 255.).round() as u8
}

impl From<Rgb> for Oklab {
    fn from(c: Rgb) -> Self {
        let (r, g, b) = (to_linear(c.r), to_linear(c.g), to_linear(c.b));

        let l = (0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b).cbrt();
        let m = (0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b).cbrt();
        let s = (0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b).cbrt();

        Oklab {
            l: 0.210_454_255_3 * l + 0.793_617_785_0 * m - 0.004_072_046_8 * s,
            a: 1.977_998_495_1 * l - 2.428_592_205_0 * m + 0.450_593_709_9 * s,
            b: 0.025_904_037_1 * l + 0.782_771_766_2 * m - 0.808_675_766_0 * s,
        }
    }
}

impl From<Oklab> for Rgb {
    fn from(c: Oklab) -> Self {
        let l = (c.l + 0.396_337_777_4 * c.a + 0.215_803_757_3 * c.b).powi(3);
        let m = (c.l - 0.105_561_345_8 * c.a - 0.063_854_172_8 * c.b).powi(3);
        let s = (c.l - 0.089_484_177_5 * c.a - 1.291_485_548_0 * c.b).powi(3);

        Rgb::new(
            from_linear(4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s),
            from_linear(-1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s),
            from_linear(-0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s),
        )
    }
}

impl Oklab {
    /// Linear interpolation, `t` in `[0, 1]`.
    ///
    #[inline]
    pub fn lerp(&self, other: &Oklab, t: f64) -> Oklab {
        Oklab {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    #[inline]
    pub fn distance(&self, other: &Oklab) -> f64 {
        ((self.l - other.l).powi(2) + (self.a - other.a).powi(2) + (self.b - other.b).powi(2)).sqrt()
    }
}

/// Continuous two-color scale over a numeric domain, clamped at both ends.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorScale {
    low: Oklab,
    high: Oklab,
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(low: Rgb, high: Rgb, (min, max): (f64, f64)) -> Self {
        ColorScale {
            low: low.into(),
            high: high.into(),
            min,
            max,
        }
    }

    /// Color at `v` in OKLab.  NaN is treated as the low end.
    ///
    pub fn at(&self, v: f64) -> Oklab {
        let v = if v.is_nan() { self.min } else { v.clamp(self.min, self.max) };
        let t = (v - self.min) / (self.max - self.min);
        self.low.lerp(&self.high, t)
    }

    #[inline]
    pub fn color(&self, v: f64) -> Rgb {
        self.at(v).into()
    }

    #[inline]
    pub fn low(&self) -> Oklab {
        self.low
    }
}

/// The scale used for both the quake markers and the legend.
///
pub fn depth_scale() -> ColorScale {
    ColorScale::new(SHALLOW, DEEP, DEPTH_DOMAIN)
}

/// Color of a quake at `depth` km.
///
#[inline]
pub fn depth_to_color(depth: f64) -> Rgb {
    depth_scale().color(depth)
}

/// Radius in meters of a quake of magnitude `mag`, never below `MIN_RADIUS`.
///
#[inline]
pub fn magnitude_to_radius(mag: f64) -> f64 {
    (BASE_RADIUS + mag * RADIUS_SCALE).max(MIN_RADIUS)
}

/// One swatch of the depth legend.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepthBand {
    pub from: f64,
    pub to: Option<f64>,
    pub color: Rgb,
}

impl DepthBand {
    /// `-10–10` or `90+` for the last one.
    ///
    pub fn label(&self) -> String {
        match self.to {
            Some(to) => format!("{}–{}", self.from, to),
            None => format!("{}+", self.from),
        }
    }
}

/// All legend bands.  Each swatch takes its color just inside its lower bound so it matches
/// what the markers of that band look like.
///
pub fn depth_bands() -> Vec<DepthBand> {
    let scale = depth_scale();
    DEPTH_GRADES
        .iter()
        .enumerate()
        .map(|(i, &from)| DepthBand {
            from,
            to: DEPTH_GRADES.get(i + 1).copied(),
            color: scale.color(from + 1.),
        })
        .collect()
}
