//! Color value types and the conversions between them

pub mod conversion;
mod model;

pub use conversion::{cmyk_to_hex, cmyk_to_rgb, hex_to_cmyk, hex_to_rgb, rgb_to_cmyk, rgb_to_hex};
pub use model::{CmykChannel, CmykColor, ColorFormat, HexColor, RgbChannel, RgbColor};
