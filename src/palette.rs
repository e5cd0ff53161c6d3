// Ink colours offered by the toolbar, plus parsing of CSS colour strings for the
// in-memory raster.

pub const DEFAULT_INK: &str = "rgb(255, 255, 255)";

pub const SWATCHES: [&str; 12] = [
    "#000000", "#ffffff", "#ee3333", "#e64980", "#be4bdb", "#893200", "#228be6", "#3333ee",
    "#40c057", "#00aa00", "#fab005", "#fd7e14",
];

/// Parses `#rrggbb`, `#rgb` and `rgb(r, g, b)` into opaque RGBA.
pub fn parse_css_color(s: &str) -> Option<[u8; 4]> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        return match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some([r, g, b, 255])
            }
            3 => {
                let mut out = [0u8, 0, 0, 255];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    out[i] = v * 17;
                }
                Some(out)
            }
            _ => None,
        };
    }
    let inner = s.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some([r, g, b, 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_forms() {
        assert_eq!(parse_css_color(DEFAULT_INK), Some([255, 255, 255, 255]));
        assert_eq!(parse_css_color("#ee3333"), Some([0xee, 0x33, 0x33, 255]));
        assert_eq!(parse_css_color("#fff"), Some([255, 255, 255, 255]));
        assert_eq!(parse_css_color(" rgb(1,2,3) "), Some([1, 2, 3, 255]));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_css_color("red"), None);
        assert_eq!(parse_css_color("#12345"), None);
        assert_eq!(parse_css_color("rgb(1,2)"), None);
        assert_eq!(parse_css_color("rgb(1,2,3,4)"), None);
        assert_eq!(parse_css_color("rgb(300,2,3)"), None);
        // six bytes, but not six hex digits
        assert_eq!(parse_css_color("#a\u{e9}bcd"), None);
        assert_eq!(parse_css_color("#\u{e9}\u{e9}\u{e9}"), None);
    }

    #[test]
    fn every_swatch_parses() {
        for sw in SWATCHES {
            assert!(parse_css_color(sw).is_some(), "{sw}");
        }
    }
}
