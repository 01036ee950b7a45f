//! Property-based tests for color conversions
//!
//! Tests round-trip and range invariants of the hex, RGB and CMYK
//! conversions across the whole input space.

use color_convert::{
    cmyk_to_rgb, convert, hex_to_rgb, rgb_to_cmyk, rgb_to_hex, validate_cmyk, validate_hex,
    validate_rgb, CmykColor, ColorFormat, ColorInput, HexColor, HexError, RgbColor, RgbError,
};
use proptest::prelude::*;

// Strategy for valid hex tokens, mixing upper and lower case digits
fn hex_token() -> impl Strategy<Value = String> {
    "[0-9a-fA-F]{6}"
}

prop_compose! {
    fn rgb_strategy()(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) -> RgbColor {
        RgbColor::new(r, g, b)
    }
}

prop_compose! {
    fn cmyk_strategy()(
        c in 0..=100u8,
        m in 0..=100u8,
        y in 0..=100u8,
        k in 0..=100u8
    ) -> CmykColor {
        CmykColor::new(c, m, y, k).unwrap()
    }
}

// Colors with at least one channel at full intensity
prop_compose! {
    fn saturated_rgb_strategy()(
        channel in 0..3usize,
        a in any::<u8>(),
        b in any::<u8>()
    ) -> RgbColor {
        match channel {
            0 => RgbColor::new(255, a, b),
            1 => RgbColor::new(a, 255, b),
            _ => RgbColor::new(a, b, 255),
        }
    }
}

fn max_channel_distance(a: &RgbColor, b: &RgbColor) -> u8 {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn test_hex_round_trip_is_exact(token in hex_token()) {
        let hex = HexColor::parse(&token).unwrap();
        let back = rgb_to_hex(&hex_to_rgb(&hex));
        prop_assert_eq!(back.digits(), token.to_ascii_lowercase());
    }

    #[test]
    fn test_rgb_round_trip_is_exact(rgb in rgb_strategy()) {
        prop_assert_eq!(hex_to_rgb(&rgb_to_hex(&rgb)), rgb);
    }

    #[test]
    fn test_hex_output_is_canonical(rgb in rgb_strategy()) {
        let text = rgb_to_hex(&rgb).to_string();
        prop_assert_eq!(text.len(), 7);
        prop_assert!(text.starts_with('#'));
        prop_assert!(text[1..].chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_cmyk_round_trip_within_two(rgb in rgb_strategy()) {
        let back = cmyk_to_rgb(&rgb_to_cmyk(&rgb).unwrap()).unwrap();
        prop_assert!(
            max_channel_distance(&rgb, &back) <= 2,
            "{} came back as {}", rgb, back
        );
    }

    #[test]
    fn test_cmyk_round_trip_within_one_for_saturated(rgb in saturated_rgb_strategy()) {
        let back = cmyk_to_rgb(&rgb_to_cmyk(&rgb).unwrap()).unwrap();
        prop_assert!(
            max_channel_distance(&rgb, &back) <= 1,
            "{} came back as {}", rgb, back
        );
    }

    #[test]
    fn test_cmyk_round_trip_within_one_for_grays(level in any::<u8>()) {
        let rgb = RgbColor::new(level, level, level);
        let cmyk = rgb_to_cmyk(&rgb).unwrap();
        prop_assert_eq!([cmyk.cyan(), cmyk.magenta(), cmyk.yellow()], [0, 0, 0]);

        let back = cmyk_to_rgb(&cmyk).unwrap();
        prop_assert!(max_channel_distance(&rgb, &back) <= 1);
    }

    #[test]
    fn test_rgb_to_cmyk_has_zero_ink_on_max_channel(rgb in rgb_strategy()) {
        let cmyk = rgb_to_cmyk(&rgb).unwrap();
        let [c, m, y, _] = cmyk.to_array();
        prop_assert!(c.min(m).min(y) == 0);
    }

    #[test]
    fn test_cmyk_to_rgb_is_total(cmyk in cmyk_strategy()) {
        prop_assert!(cmyk_to_rgb(&cmyk).is_ok());
    }

    #[test]
    fn test_full_key_is_black(c in 0..=100u8, m in 0..=100u8, y in 0..=100u8) {
        let cmyk = CmykColor::new(c, m, y, 100).unwrap();
        prop_assert_eq!(cmyk_to_rgb(&cmyk).unwrap(), RgbColor::black());
    }

    #[test]
    fn test_validate_hex_rejects_wrong_length(token in "[0-9a-f]{0,12}") {
        prop_assume!(token.len() != 6);
        prop_assert_eq!(
            validate_hex(&token),
            Err(HexError::WrongLength { found: token.len() })
        );
    }

    #[test]
    fn test_validate_hex_rejects_non_hex_digit(
        prefix in "[0-9a-f]{0,5}",
        bad in "[g-zG-Z#]"
    ) {
        let mut token = prefix.clone();
        token.push_str(&bad);
        while token.len() < 6 {
            token.push('0');
        }
        let is_invalid_digit = matches!(
            validate_hex(&token),
            Err(HexError::InvalidDigit { position, .. }) if position == prefix.len()
        );
        prop_assert!(is_invalid_digit);
    }

    #[test]
    fn test_validate_rgb_matches_range(r in 0..1000u32, g in 0..1000u32, b in 0..1000u32) {
        let tokens = [r.to_string(), g.to_string(), b.to_string()];
        let result = validate_rgb(&tokens);
        if r <= 255 && g <= 255 && b <= 255 {
            prop_assert!(result.is_ok());
        } else {
            let is_out_of_range = matches!(result, Err(RgbError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
        }
    }

    #[test]
    fn test_validate_cmyk_matches_range(values in prop::array::uniform4(0..200u32)) {
        let tokens: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(validate_cmyk(&tokens).is_ok(), values.iter().all(|v| *v <= 100));
    }

    #[test]
    fn test_convert_from_rgb_agrees_with_direct_calls(rgb in rgb_strategy()) {
        let [r, g, b] = rgb.to_array();
        let input = ColorInput::Rgb(vec![r.to_string(), g.to_string(), b.to_string()]);
        let set = convert(&input).unwrap();

        prop_assert_eq!(set.rgb, rgb);
        prop_assert_eq!(set.get(ColorFormat::Hex), rgb_to_hex(&rgb).to_string());
        prop_assert_eq!(set.cmyk, rgb_to_cmyk(&rgb).unwrap());
    }
}
