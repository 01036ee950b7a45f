//! # color-convert
//!
//! Validation and uncalibrated conversion between the three common textual
//! color representations:
//!
//! - **Hex**: `#rrggbb`, six hexadecimal digits
//! - **RGB**: three integer channels in `0..=255`
//! - **CMYK**: four integer percentages in `0..=100`
//!
//! Input goes through the validator before any arithmetic runs, so a value of
//! [`HexColor`], [`RgbColor`] or [`CmykColor`] is always in range. Hex and RGB
//! convert into each other exactly; anything through CMYK is rounded to whole
//! percentages and therefore lossy.
//!
//! ## Quick Start
//!
//! ```rust
//! use color_convert::{convert, ColorFormat, ColorInput};
//!
//! # fn main() -> color_convert::Result<()> {
//! let input = ColorInput::Rgb(vec!["255".into(), "0".into(), "0".into()]);
//! let set = convert(&input)?;
//!
//! assert_eq!(set.get(ColorFormat::Hex), "#ff0000");
//! assert_eq!(set.get(ColorFormat::Cmyk), "0 100 100 0");
//! # Ok(())
//! # }
//! ```
//!
//! ## Individual conversions
//!
//! ```rust
//! use color_convert::{hex_to_rgb, rgb_to_cmyk, HexColor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hex = HexColor::parse("1e293b")?;
//! let rgb = hex_to_rgb(&hex);
//! println!("{rgb} -> {}", rgb_to_cmyk(&rgb)?);
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod error;
pub mod pipeline;
pub mod validation;

pub use color::{
    cmyk_to_hex, cmyk_to_rgb, hex_to_cmyk, hex_to_rgb, rgb_to_cmyk, rgb_to_hex, CmykChannel,
    CmykColor, ColorFormat, HexColor, RgbChannel, RgbColor,
};
pub use error::{
    CmykError, ColorError, ContractViolation, HexError, Result, RgbError, ValidationError,
};
pub use pipeline::{convert, ColorInput, ColorSet};
pub use validation::{validate_cmyk, validate_hex, validate_rgb};

/// Current version of color-convert
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
