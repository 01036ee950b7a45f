//! Structural and range checks on raw color tokens
//!
//! Every check here runs before any numeric conversion. Tokens are expected
//! to be pre-cleaned by the caller: no `#`, no `rgb(`/`cmyk(` wrappers, no
//! `%` signs and no surrounding whitespace.

use tracing::debug;

use crate::color::{CmykChannel, RgbChannel};
use crate::error::{CmykError, HexError, RgbError};

/// Number of digits in a hex color.
pub const HEX_DIGITS: usize = 6;

/// Largest value of an RGB channel.
pub const RGB_MAX: u8 = 255;

/// Largest value of a CMYK channel, in percent.
pub const CMYK_MAX: u8 = 100;

/// Checks that `token` is exactly six hexadecimal digits.
///
/// Digits are matched case-insensitively.
pub fn validate_hex(token: &str) -> Result<(), HexError> {
    let result = check_hex(token);
    match &result {
        Ok(()) => debug!(token, "hex token accepted"),
        Err(err) => debug!(token, %err, "hex token rejected"),
    }
    result
}

fn check_hex(token: &str) -> Result<(), HexError> {
    let found = token.chars().count();
    if found != HEX_DIGITS {
        return Err(HexError::WrongLength { found });
    }

    match token
        .chars()
        .enumerate()
        .find(|(_, digit)| !digit.is_ascii_hexdigit())
    {
        Some((position, digit)) => Err(HexError::InvalidDigit { digit, position }),
        None => Ok(()),
    }
}

/// Checks that `tokens` holds exactly three integers in `0..=255`.
pub fn validate_rgb<S: AsRef<str>>(tokens: &[S]) -> Result<(), RgbError> {
    parse_rgb(tokens).map(|_| ())
}

/// Checks that `tokens` holds exactly four integers in `0..=100`.
pub fn validate_cmyk<S: AsRef<str>>(tokens: &[S]) -> Result<(), CmykError> {
    parse_cmyk(tokens).map(|_| ())
}

/// Parsed RGB channel values, in red, green, blue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RgbChannels(pub [u8; 3]);

/// Parsed CMYK channel values, in cyan, magenta, yellow, key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CmykChannels(pub [u8; 4]);

pub(crate) fn parse_rgb<S: AsRef<str>>(tokens: &[S]) -> Result<RgbChannels, RgbError> {
    let result = parse_channels::<S, 3>(tokens, RGB_MAX)
        .map(RgbChannels)
        .map_err(|fault| match fault {
            TokenFault::WrongArity { found } => RgbError::WrongArity { found },
            TokenFault::NotNumeric { index, token } => RgbError::NotNumeric {
                channel: RgbChannel::ALL[index],
                token,
            },
            TokenFault::OutOfRange { index, token } => RgbError::OutOfRange {
                channel: RgbChannel::ALL[index],
                token,
            },
        });
    match &result {
        Ok(RgbChannels(values)) => debug!(?values, "rgb tokens accepted"),
        Err(err) => debug!(%err, "rgb tokens rejected"),
    }
    result
}

pub(crate) fn parse_cmyk<S: AsRef<str>>(tokens: &[S]) -> Result<CmykChannels, CmykError> {
    let result = parse_channels::<S, 4>(tokens, CMYK_MAX)
        .map(CmykChannels)
        .map_err(|fault| match fault {
            TokenFault::WrongArity { found } => CmykError::WrongArity { found },
            TokenFault::NotNumeric { index, token } => CmykError::NotNumeric {
                channel: CmykChannel::ALL[index],
                token,
            },
            TokenFault::OutOfRange { index, token } => CmykError::OutOfRange {
                channel: CmykChannel::ALL[index],
                token,
            },
        });
    match &result {
        Ok(CmykChannels(values)) => debug!(?values, "cmyk tokens accepted"),
        Err(err) => debug!(%err, "cmyk tokens rejected"),
    }
    result
}

/// Format-agnostic failure, mapped onto the per-format error by the caller.
#[derive(Debug, PartialEq, Eq)]
enum TokenFault {
    WrongArity { found: usize },
    NotNumeric { index: usize, token: String },
    OutOfRange { index: usize, token: String },
}

fn parse_channels<S: AsRef<str>, const N: usize>(
    tokens: &[S],
    max: u8,
) -> Result<[u8; N], TokenFault> {
    if tokens.len() != N {
        return Err(TokenFault::WrongArity {
            found: tokens.len(),
        });
    }

    let mut values = [0u8; N];
    for (index, (slot, token)) in values.iter_mut().zip(tokens).enumerate() {
        let token = token.as_ref();
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TokenFault::NotNumeric {
                index,
                token: token.to_string(),
            });
        }

        // All digits, so a parse failure can only mean overflow.
        *slot = match token.parse::<u64>() {
            Ok(value) if value <= u64::from(max) => value as u8,
            _ => {
                return Err(TokenFault::OutOfRange {
                    index,
                    token: token.to_string(),
                })
            }
        };
    }
    Ok(values)
}
