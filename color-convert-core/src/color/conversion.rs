//! Uncalibrated conversions between hex, RGB and CMYK
//!
//! Hex and RGB are two spellings of the same byte triple, so conversions
//! between them are exact. CMYK is reached through the textbook formula
//! with no color profile involved; channels are rounded half-up to whole
//! percentages, which makes every path through CMYK lossy.
//!
//! The RGB -> CMYK -> RGB round trip stays within 2 per channel, and within 1
//! when the color is gray or has a channel at 255.

use tracing::trace;

use super::{CmykColor, HexColor, RgbColor};
use crate::error::ContractViolation;
use crate::validation::{CMYK_MAX, RGB_MAX};

/// Splits the six digits into three bytes.
pub fn hex_to_rgb(hex: &HexColor) -> RgbColor {
    let digits = hex.digits().as_bytes();
    let byte = |i: usize| (nibble(digits[i]) << 4) | nibble(digits[i + 1]);
    let rgb = RgbColor::new(byte(0), byte(2), byte(4));
    trace!(%hex, %rgb, "hex -> rgb");
    rgb
}

/// Writes each channel as two lower-case hex digits.
pub fn rgb_to_hex(rgb: &RgbColor) -> HexColor {
    let [r, g, b] = rgb.to_array();
    let hex = HexColor::from_bytes(r, g, b);
    trace!(%rgb, %hex, "rgb -> hex");
    hex
}

pub fn rgb_to_cmyk(rgb: &RgbColor) -> Result<CmykColor, ContractViolation> {
    let [r, g, b] = rgb.to_array();
    let max = r.max(g).max(b);

    // Pure black has no defined chroma; leave C, M and Y at zero.
    if max == 0 {
        let cmyk = CmykColor::from_checked(0, 0, 0, CMYK_MAX);
        trace!(%rgb, %cmyk, "rgb -> cmyk");
        return Ok(cmyk);
    }

    let unit = |value: u8| f64::from(value) / f64::from(RGB_MAX);
    let k = 1.0 - unit(max);
    let ink = |value: u8| (1.0 - unit(value) - k) / (1.0 - k);

    let cmyk = CmykColor::from_checked(
        to_percent(ink(r), "cyan")?,
        to_percent(ink(g), "magenta")?,
        to_percent(ink(b), "yellow")?,
        to_percent(k, "key")?,
    );
    trace!(%rgb, %cmyk, "rgb -> cmyk");
    Ok(cmyk)
}

pub fn cmyk_to_rgb(cmyk: &CmykColor) -> Result<RgbColor, ContractViolation> {
    let [c, m, y, k] = cmyk.to_array();
    let percent = |value: u8| f64::from(value) / f64::from(CMYK_MAX);
    let channel = |ink: u8| f64::from(RGB_MAX) * (1.0 - percent(ink)) * (1.0 - percent(k));

    let rgb = RgbColor::new(
        to_byte(channel(c), "red")?,
        to_byte(channel(m), "green")?,
        to_byte(channel(y), "blue")?,
    );
    trace!(%cmyk, %rgb, "cmyk -> rgb");
    Ok(rgb)
}

pub fn hex_to_cmyk(hex: &HexColor) -> Result<CmykColor, ContractViolation> {
    rgb_to_cmyk(&hex_to_rgb(hex))
}

pub fn cmyk_to_hex(cmyk: &CmykColor) -> Result<HexColor, ContractViolation> {
    cmyk_to_rgb(cmyk).map(|rgb| rgb_to_hex(&rgb))
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => unreachable!("HexColor holds only lower-case hex digits"),
    }
}

/// Scales a 0-1 ink fraction to a whole percentage.
fn to_percent(fraction: f64, channel: &'static str) -> Result<u8, ContractViolation> {
    round_into_range(fraction * f64::from(CMYK_MAX), CMYK_MAX, "CMYK", channel)
}

fn to_byte(value: f64, channel: &'static str) -> Result<u8, ContractViolation> {
    round_into_range(value, RGB_MAX, "RGB", channel)
}

fn round_into_range(
    value: f64,
    max: u8,
    space: &'static str,
    channel: &'static str,
) -> Result<u8, ContractViolation> {
    let rounded = value.round();
    if rounded.is_finite() && (0.0..=f64::from(max)).contains(&rounded) {
        Ok(rounded as u8)
    } else {
        Err(ContractViolation {
            space,
            channel,
            value,
            max,
        })
    }
}
