//! Turns raw command-line words into a tagged [`ColorInput`]

use color_convert::{ColorFormat, ColorInput};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

lazy_static! {
    /// Whitespace plus the `#` and `%` decorations users type around values.
    static ref NOISE: Regex = Regex::new(r"[\s#%]").unwrap();

    /// An optional `rgb(` / `cmyk(` opener and `)` closer around the payload.
    static ref WRAPPER: Regex = Regex::new(r"^(?:rgb\(|cmyk\()?(.*?)\)?$").unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("only one input format may be given at a time, got {}", flag_list(.0))]
    TooManyModes(Vec<ColorFormat>),

    #[error("{0} is required (did you forget to wrap the color in quotes?)\nFor more info, use the '-h' or '--help' flag.")]
    MissingInput(&'static str),
}

fn flag_list(formats: &[ColorFormat]) -> String {
    formats
        .iter()
        .map(|format| format!("--{format}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Picks the single source format out of the three mode flags.
pub fn resolve_mode(hex: bool, rgb: bool, cmyk: bool) -> Result<ColorFormat, UsageError> {
    let set: Vec<ColorFormat> = ColorFormat::ALL
        .into_iter()
        .zip([hex, rgb, cmyk])
        .filter_map(|(format, on)| on.then_some(format))
        .collect();

    match set.as_slice() {
        [] => Err(UsageError::MissingInput(
            "an input format flag (--hex, --rgb or --cmyk)",
        )),
        [format] => Ok(*format),
        _ => Err(UsageError::TooManyModes(set)),
    }
}

/// Normalizes raw words into validator tokens.
///
/// Each word is lower-cased, stripped of whitespace, `#`, `%` and any
/// `rgb(...)`/`cmyk(...)` wrapper, then split on commas. Commas at the edges
/// of a word are separators between shell words and are dropped; an empty
/// fragment between two commas is kept so the validator can reject it.
pub fn clean_tokens<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut tokens = Vec::new();
    for word in raw {
        let lowered = word.as_ref().to_lowercase();
        let bare = NOISE.replace_all(&lowered, "");
        let payload = WRAPPER
            .captures(&bare)
            .and_then(|caps| caps.get(1))
            .map_or("", |m| m.as_str())
            .trim_matches(',');

        if payload.is_empty() {
            continue;
        }
        tokens.extend(payload.split(',').map(str::to_string));
    }
    tokens
}

/// Resolves the mode flags and cleans the positional words into a [`ColorInput`].
///
/// Flag conflicts are reported before the color value is looked at.
pub fn build_input<S: AsRef<str>>(
    hex: bool,
    rgb: bool,
    cmyk: bool,
    raw: &[S],
) -> Result<ColorInput, UsageError> {
    let format = resolve_mode(hex, rgb, cmyk)?;

    let tokens = clean_tokens(raw);
    if tokens.is_empty() {
        return Err(UsageError::MissingInput("a color value"));
    }

    debug!(%format, ?tokens, "cleaned input tokens");
    Ok(ColorInput::new(format, tokens))
}
