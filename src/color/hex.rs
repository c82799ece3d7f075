use super::packed::PackedColor;
use crate::error::{Error, Result};

/// Parses a hex color notation into a packed color.
///
/// The supported notations are `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`,
/// case-insensitive. The alpha component defaults to 255 when absent.
///
/// # Arguments
/// * `value` - The string to parse.
///
/// # Returns
/// The parsed color, or an error for any other input.
pub fn parse_hex(value: &str) -> Result<PackedColor> {
    let invalid = || Error::InvalidHexString(value.to_string());

    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        3 | 4 => {
            let mut channels = [u8::MAX; 4];
            for (i, c) in digits.chars().enumerate() {
                let nibble = c.to_digit(16).ok_or_else(invalid)? as u8;
                channels[i] = nibble << 4 | nibble;
            }
            let [r, g, b, a] = channels;
            Ok(PackedColor::from_rgba(r, g, b, a))
        }
        6 | 8 => {
            let mut channels = [u8::MAX; 4];
            for (i, pair) in digits.as_bytes().chunks_exact(2).enumerate() {
                let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
                channels[i] = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
            }
            let [r, g, b, a] = channels;
            Ok(PackedColor::from_rgba(r, g, b, a))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::short("#F80", 0xFF, 0x88, 0x00, 0xFF)]
    #[case::short_alpha("#F808", 0xFF, 0x88, 0x00, 0x88)]
    #[case::long("#1A2B3C", 0x1A, 0x2B, 0x3C, 0xFF)]
    #[case::long_alpha("#1A2B3C4D", 0x1A, 0x2B, 0x3C, 0x4D)]
    #[case::lowercase("#ff0080", 0xFF, 0x00, 0x80, 0xFF)]
    #[case::mixed_case("#FfDf00", 0xFF, 0xDF, 0x00, 0xFF)]
    fn test_parse_hex(
        #[case] value: &str,
        #[case] r: u8,
        #[case] g: u8,
        #[case] b: u8,
        #[case] a: u8,
    ) {
        let packed = parse_hex(value).unwrap();
        assert_eq!(packed, PackedColor::from_rgba(r, g, b, a));
    }

    #[rstest]
    #[case::empty("")]
    #[case::missing_prefix("1A2B3C")]
    #[case::too_short("#F8")]
    #[case::bad_length("#1A2B3")]
    #[case::too_long("#1A2B3C4D5E")]
    #[case::non_hex_digit("#GGHHII")]
    #[case::whitespace("# A2B3C")]
    fn test_parse_hex_invalid(#[case] value: &str) {
        let result = parse_hex(value);
        assert!(matches!(result, Err(Error::InvalidHexString(_))));
    }
}
