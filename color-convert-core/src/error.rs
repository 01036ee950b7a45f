use thiserror::Error;

use crate::color::{CmykChannel, RgbChannel};

/// Rejection of a hex color token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("hex color must be exactly 6 digits, got {found}")]
    WrongLength { found: usize },

    #[error("invalid hex digit '{digit}' at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// Rejection of an RGB token list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RgbError {
    #[error("RGB needs exactly 3 values, got {found}")]
    WrongArity { found: usize },

    #[error("{channel} value '{token}' is not a non-negative integer")]
    NotNumeric { channel: RgbChannel, token: String },

    #[error("{channel} value {token} is out of range (0-255)")]
    OutOfRange { channel: RgbChannel, token: String },
}

/// Rejection of a CMYK token list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CmykError {
    #[error("CMYK needs exactly 4 values, got {found}")]
    WrongArity { found: usize },

    #[error("{channel} value '{token}' is not a non-negative integer")]
    NotNumeric { channel: CmykChannel, token: String },

    #[error("{channel} value {token} is out of range (0-100%)")]
    OutOfRange { channel: CmykChannel, token: String },
}

/// A user-input fault found before any conversion ran.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid hex color: {0}")]
    Hex(#[from] HexError),

    #[error("invalid RGB color: {0}")]
    Rgb(#[from] RgbError),

    #[error("invalid CMYK color: {0}")]
    Cmyk(#[from] CmykError),
}

/// A converter produced a channel outside its declared range.
///
/// Validated input can never trigger this; seeing one means a bug in the
/// conversion arithmetic, not bad user input.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("internal error: {space} channel {channel} computed as {value}, outside 0-{max}")]
pub struct ContractViolation {
    pub space: &'static str,
    pub channel: &'static str,
    pub value: f64,
    pub max: u8,
}

/// Anything that can stop a conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

impl ColorError {
    /// True for faults the user can fix by changing the input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ColorError::Validation(_))
    }
}

impl From<HexError> for ColorError {
    fn from(err: HexError) -> Self {
        ColorError::Validation(err.into())
    }
}

impl From<RgbError> for ColorError {
    fn from(err: RgbError) -> Self {
        ColorError::Validation(err.into())
    }
}

impl From<CmykError> for ColorError {
    fn from(err: CmykError) -> Self {
        ColorError::Validation(err.into())
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_error_display() {
        let error = HexError::WrongLength { found: 4 };
        assert_eq!(error.to_string(), "hex color must be exactly 6 digits, got 4");

        let error = HexError::InvalidDigit {
            digit: 'g',
            position: 0,
        };
        assert_eq!(error.to_string(), "invalid hex digit 'g' at position 0");
    }

    #[test]
    fn test_channel_errors_name_the_channel() {
        let error = RgbError::OutOfRange {
            channel: RgbChannel::Red,
            token: "256".to_string(),
        };
        assert_eq!(error.to_string(), "red value 256 is out of range (0-255)");

        let error = CmykError::OutOfRange {
            channel: CmykChannel::Key,
            token: "101".to_string(),
        };
        assert_eq!(error.to_string(), "key value 101 is out of range (0-100%)");
    }

    #[test]
    fn test_validation_error_wraps_source_message() {
        let error: ValidationError = RgbError::WrongArity { found: 2 }.into();
        assert_eq!(
            error.to_string(),
            "invalid RGB color: RGB needs exactly 3 values, got 2"
        );
    }

    #[test]
    fn test_color_error_classes() {
        let user: ColorError = HexError::WrongLength { found: 0 }.into();
        assert!(user.is_user_error());
        assert_eq!(user.to_string(), "invalid hex color: hex color must be exactly 6 digits, got 0");

        let internal: ColorError = ContractViolation {
            space: "CMYK",
            channel: "cyan",
            value: 101.0,
            max: 100,
        }
        .into();
        assert!(!internal.is_user_error());
        assert!(internal.to_string().starts_with("internal error:"));
    }
}
