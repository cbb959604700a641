//! Glyphs for OpenWeather icon codes.
//!
//! Codes follow the provider's `NNx` scheme where `x` is `d` (day) or `n` (night).

const ICONS: &[(&str, &str)] = &[
    ("01d", "☼"),
    ("02d", "🌤"),
    ("03d", "🌥"),
    ("04d", "☁"),
    ("09d", "🌧"),
    ("10d", "🌦"),
    ("11d", "🌩"),
    ("13d", "🌨"),
    ("50d", "🌫"),
    ("01n", "🌑"),
    ("02n", "🌤"),
    ("03n", "🌥"),
    ("04n", "☁"),
    ("09n", "🌧"),
    ("10n", "🌦"),
    ("11n", "🌩"),
    ("13n", "🌨"),
    ("50n", "🌫"),
];

/// Glyph for an icon code, or `""` when the code is unknown.
pub fn glyph(code: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, glyph)| *glyph)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_codes() {
        assert_eq!(glyph("01d"), "☼");
        assert_eq!(glyph("02d"), "🌤");
        assert_eq!(glyph("03d"), "🌥");
        assert_eq!(glyph("04d"), "☁");
        assert_eq!(glyph("09d"), "🌧");
        assert_eq!(glyph("10d"), "🌦");
        assert_eq!(glyph("11d"), "🌩");
        assert_eq!(glyph("13d"), "🌨");
        assert_eq!(glyph("50d"), "🌫");
    }

    #[test]
    fn night_codes_differ_only_for_clear_sky() {
        assert_eq!(glyph("01n"), "🌑");
        for code in ["02", "03", "04", "09", "10", "11", "13", "50"] {
            assert_eq!(glyph(&format!("{code}n")), glyph(&format!("{code}d")), "code {code}");
        }
    }

    #[test]
    fn every_known_code_has_a_glyph() {
        for (code, _) in ICONS {
            assert!(!glyph(code).is_empty(), "{code} has no glyph");
        }
    }

    #[test]
    fn unknown_codes_yield_empty_string() {
        for code in ["", "01", "01D", "05d", "xx", " 01d", "01d "] {
            assert_eq!(glyph(code), "", "{code:?}");
        }
    }
}
