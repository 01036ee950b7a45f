//! Converts a few colors from each format and prints every representation.
//!
//! Run with: `cargo run -p color-convert --example convert_all`

use color_convert::{convert, ColorFormat, ColorInput, Result};

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn main() -> Result<()> {
    let inputs = [
        ColorInput::Hex("1e293b".to_string()),
        ColorInput::Rgb(tokens(&["255", "102", "0"])),
        ColorInput::Cmyk(tokens(&["100", "0", "100", "0"])),
    ];

    for input in &inputs {
        let set = convert(input)?;
        println!("from {}:", input.format());
        for format in ColorFormat::ALL {
            println!("  {:<5} {}", format!("{format}:"), set.get(format));
        }
    }

    // Invalid input is rejected before any conversion runs
    let bad = ColorInput::Rgb(tokens(&["256", "0", "0"]));
    if let Err(e) = convert(&bad) {
        println!("rejected: {e}");
    }

    Ok(())
}
