use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

use crate::error::{CmykError, HexError, RgbError};
use crate::validation::{self, CmykChannels, RgbChannels};

/// The three textual color representations the crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorFormat {
    Hex,
    Rgb,
    Cmyk,
}

impl ColorFormat {
    /// All formats in canonical output order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Cmyk];

    pub fn name(&self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ColorFormat::ALL
            .into_iter()
            .find(|format| s.eq_ignore_ascii_case(format.name()))
            .ok_or_else(|| format!("unknown color format '{s}' (expected hex, rgb or cmyk)"))
    }
}

/// One channel of an RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    pub const ALL: [RgbChannel; 3] = [RgbChannel::Red, RgbChannel::Green, RgbChannel::Blue];
}

impl fmt::Display for RgbChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RgbChannel::Red => "red",
            RgbChannel::Green => "green",
            RgbChannel::Blue => "blue",
        })
    }
}

/// One channel of a CMYK color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmykChannel {
    Cyan,
    Magenta,
    Yellow,
    Key,
}

impl CmykChannel {
    pub const ALL: [CmykChannel; 4] = [
        CmykChannel::Cyan,
        CmykChannel::Magenta,
        CmykChannel::Yellow,
        CmykChannel::Key,
    ];
}

impl fmt::Display for CmykChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CmykChannel::Cyan => "cyan",
            CmykChannel::Magenta => "magenta",
            CmykChannel::Yellow => "yellow",
            CmykChannel::Key => "key",
        })
    }
}

/// Six lower-case hexadecimal digits, stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    digits: String,
}

impl HexColor {
    /// Validates `token` and builds the color from it.
    ///
    /// Upper-case digits are accepted and folded to lower case. The token
    /// must not carry a `#`; stripping it is the caller's job.
    pub fn parse(token: &str) -> Result<Self, HexError> {
        validation::validate_hex(token)?;
        Ok(Self {
            digits: token.to_ascii_lowercase(),
        })
    }

    /// Builds the hex form of a byte triple. Never fails.
    pub(crate) fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            digits: format!("{r:02x}{g:02x}{b:02x}"),
        }
    }

    /// The six digits, without `#`.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits)
    }
}

impl FromStr for HexColor {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An additive color with three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Validates three decimal tokens and builds the color from them.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, RgbError> {
        let RgbChannels([red, green, blue]) = validation::parse_rgb(tokens)?;
        Ok(Self::new(red, green, blue))
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0)
    }

    pub const fn green() -> Self {
        Self::new(0, 255, 0)
    }

    pub const fn blue() -> Self {
        Self::new(0, 0, 255)
    }

    pub fn channel(&self, channel: RgbChannel) -> u8 {
        match channel {
            RgbChannel::Red => self.red,
            RgbChannel::Green => self.green,
            RgbChannel::Blue => self.blue,
        }
    }

    pub fn red_value(&self) -> u8 {
        self.red
    }

    pub fn green_value(&self) -> u8 {
        self.green
    }

    pub fn blue_value(&self) -> u8 {
        self.blue
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}

/// A subtractive color with four percentage channels in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CmykColor {
    cyan: u8,
    magenta: u8,
    yellow: u8,
    key: u8,
}

impl CmykColor {
    /// Percentage ceiling shared by every channel.
    pub const MAX: u8 = 100;

    /// Builds a color from percentages, rejecting any channel above 100.
    pub fn new(cyan: u8, magenta: u8, yellow: u8, key: u8) -> Result<Self, CmykError> {
        let values = [cyan, magenta, yellow, key];
        if let Some((channel, value)) = CmykChannel::ALL
            .into_iter()
            .zip(values)
            .find(|(_, value)| *value > Self::MAX)
        {
            return Err(CmykError::OutOfRange {
                channel,
                token: value.to_string(),
            });
        }
        Ok(Self {
            cyan,
            magenta,
            yellow,
            key,
        })
    }

    /// Validates four decimal tokens and builds the color from them.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, CmykError> {
        let CmykChannels([cyan, magenta, yellow, key]) = validation::parse_cmyk(tokens)?;
        Ok(Self {
            cyan,
            magenta,
            yellow,
            key,
        })
    }

    /// Builds a color whose channels were already range-checked.
    pub(crate) const fn from_checked(cyan: u8, magenta: u8, yellow: u8, key: u8) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    pub fn channel(&self, channel: CmykChannel) -> u8 {
        match channel {
            CmykChannel::Cyan => self.cyan,
            CmykChannel::Magenta => self.magenta,
            CmykChannel::Yellow => self.yellow,
            CmykChannel::Key => self.key,
        }
    }

    pub fn cyan(&self) -> u8 {
        self.cyan
    }

    pub fn magenta(&self) -> u8 {
        self.magenta
    }

    pub fn yellow(&self) -> u8 {
        self.yellow
    }

    pub fn key(&self) -> u8 {
        self.key
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.cyan, self.magenta, self.yellow, self.key]
    }
}

impl fmt::Display for CmykColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}
