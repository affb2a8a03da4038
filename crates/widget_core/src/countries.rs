//! The built-in country selector entries.

/// One row of the country selector.
///
/// Dial codes are not unique across entries: `+7` appears for both Russia
/// and Kazakhstan. Widgets must therefore key state on the code *value*,
/// never on an entry index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryEntry {
    pub dial_code: String,
    pub display_name: String,
    pub flag_glyph: String,
}

impl CountryEntry {
    pub fn new(dial_code: &str, display_name: &str, flag_glyph: &str) -> Self {
        Self {
            dial_code: dial_code.to_string(),
            display_name: display_name.to_string(),
            flag_glyph: flag_glyph.to_string(),
        }
    }

    /// The label shown in the selector: flag glyph plus dial code.
    pub fn option_label(&self) -> String {
        format!("{} {}", self.flag_glyph, self.dial_code)
    }
}

/// The fixed default list, in selector order.
pub fn builtin_countries() -> Vec<CountryEntry> {
    [
        ("+7", "Russia", "🇷🇺"),
        ("+380", "Ukraine", "🇺🇦"),
        ("+375", "Belarus", "🇧🇾"),
        ("+7", "Kazakhstan", "🇰🇿"),
        ("+998", "Uzbekistan", "🇺🇿"),
        ("+86", "China", "🇨🇳"),
        ("+1", "USA/Canada", "🇺🇸"),
        ("+44", "United Kingdom", "🇬🇧"),
        ("+49", "Germany", "🇩🇪"),
        ("+33", "France", "🇫🇷"),
        ("+39", "Italy", "🇮🇹"),
        ("+34", "Spain", "🇪🇸"),
        ("+81", "Japan", "🇯🇵"),
        ("+82", "Korea", "🇰🇷"),
        ("+91", "India", "🇮🇳"),
        ("+90", "Turkey", "🇹🇷"),
        ("+971", "UAE", "🇦🇪"),
        ("+966", "Saudi Arabia", "🇸🇦"),
        ("+20", "Egypt", "🇪🇬"),
        ("+27", "South Africa", "🇿🇦"),
    ]
    .into_iter()
    .map(|(code, name, flag)| CountryEntry::new(code, name, flag))
    .collect()
}
