//! Validate-then-convert pipeline
//!
//! A [`ColorInput`] pairs cleaned tokens with the format they claim to be.
//! [`convert`] validates them for that format and, only on success, derives
//! the other two representations.

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::debug;

use crate::color::{
    cmyk_to_rgb, hex_to_rgb, rgb_to_cmyk, rgb_to_hex, CmykColor, ColorFormat, HexColor, RgbColor,
};
use crate::error::Result;

/// Cleaned tokens tagged with their declared source format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// Six hex digits without `#`.
    Hex(String),
    /// Red, green and blue as decimal strings.
    Rgb(Vec<String>),
    /// Cyan, magenta, yellow and key as decimal percentage strings.
    Cmyk(Vec<String>),
}

impl ColorInput {
    /// Tags `tokens` with `format`.
    ///
    /// Hex input is a single token; several tokens are joined, so `ff ff ff`
    /// is read as `ffffff` and still has to pass validation.
    pub fn new(format: ColorFormat, tokens: Vec<String>) -> Self {
        match format {
            ColorFormat::Hex => ColorInput::Hex(tokens.concat()),
            ColorFormat::Rgb => ColorInput::Rgb(tokens),
            ColorFormat::Cmyk => ColorInput::Cmyk(tokens),
        }
    }

    pub fn format(&self) -> ColorFormat {
        match self {
            ColorInput::Hex(_) => ColorFormat::Hex,
            ColorInput::Rgb(_) => ColorFormat::Rgb,
            ColorInput::Cmyk(_) => ColorFormat::Cmyk,
        }
    }
}

/// One color in every supported representation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ColorSet {
    pub hex: HexColor,
    pub rgb: RgbColor,
    pub cmyk: CmykColor,
}

impl ColorSet {
    /// Canonical text for one representation: `#rrggbb`, `R G B` or `C M Y K`.
    pub fn get(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.hex.to_string(),
            ColorFormat::Rgb => self.rgb.to_string(),
            ColorFormat::Cmyk => self.cmyk.to_string(),
        }
    }
}

/// Validates `input` and converts it to every format.
///
/// The source representation is kept as given; only the others are derived.
///
/// # Errors
///
/// [`ColorError::Validation`](crate::ColorError::Validation) when the tokens
/// do not form a value of the declared format, in which case no conversion
/// runs. [`ColorError::Contract`](crate::ColorError::Contract) only if the
/// conversion arithmetic itself misbehaves.
pub fn convert(input: &ColorInput) -> Result<ColorSet> {
    debug!(format = %input.format(), "converting color");

    let set = match input {
        ColorInput::Hex(token) => {
            let hex = HexColor::parse(token)?;
            let rgb = hex_to_rgb(&hex);
            let cmyk = rgb_to_cmyk(&rgb)?;
            ColorSet { hex, rgb, cmyk }
        }
        ColorInput::Rgb(tokens) => {
            let rgb = RgbColor::from_tokens(tokens)?;
            ColorSet {
                hex: rgb_to_hex(&rgb),
                cmyk: rgb_to_cmyk(&rgb)?,
                rgb,
            }
        }
        ColorInput::Cmyk(tokens) => {
            let cmyk = CmykColor::from_tokens(tokens)?;
            let rgb = cmyk_to_rgb(&cmyk)?;
            ColorSet {
                hex: rgb_to_hex(&rgb),
                rgb,
                cmyk,
            }
        }
    };

    debug!(hex = %set.hex, rgb = %set.rgb, cmyk = %set.cmyk, "conversion complete");
    Ok(set)
}
