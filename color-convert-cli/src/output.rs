//! Rendering of a converted [`ColorSet`] for the terminal

use anyhow::Result;
use color_convert::{ColorFormat, ColorSet};
use serde_json::{Map, Value};

/// Formats to print, in canonical order.
///
/// With nothing requested this is every format except the source; otherwise
/// the requested formats, de-duplicated.
pub fn targets(source: ColorFormat, requested: &[ColorFormat]) -> Vec<ColorFormat> {
    ColorFormat::ALL
        .into_iter()
        .filter(|format| {
            if requested.is_empty() {
                *format != source
            } else {
                requested.contains(format)
            }
        })
        .collect()
}

/// One `format: value` line per target.
pub fn render_text(set: &ColorSet, targets: &[ColorFormat]) -> String {
    targets
        .iter()
        .map(|format| format!("{:<5} {}\n", format!("{format}:"), set.get(*format)))
        .collect()
}

/// A single JSON object keyed by format name.
pub fn render_json(set: &ColorSet, targets: &[ColorFormat]) -> Result<String> {
    let mut object = Map::new();
    for format in targets {
        let value = match format {
            ColorFormat::Hex => serde_json::to_value(&set.hex)?,
            ColorFormat::Rgb => serde_json::to_value(set.rgb)?,
            ColorFormat::Cmyk => serde_json::to_value(set.cmyk)?,
        };
        object.insert(format.to_string(), value);
    }
    Ok(serde_json::to_string(&Value::Object(object))? + "\n")
}
