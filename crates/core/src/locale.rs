//! Locale-derived decimal formatting for report generation.
//!
//! Rust has no process-global locale, so the only locale-sensitive behavior
//! the fixture exercises - the decimal separator of formatted amounts - is
//! modeled explicitly. The seeded `LOCALE` config row picks a
//! [`DecimalStyle`] at startup, and report formatting goes through it.

/// Decimal separator style derived from a locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalStyle {
    /// `100.00` - the `en_US` behavior, also the fallback.
    #[default]
    Point,
    /// `100,00` - e.g. `fr_FR`, `de_DE`.
    Comma,
}

/// Language subtags whose conventional decimal separator is a comma.
const COMMA_LANGUAGES: &[&str] = &["fr", "de", "es", "it", "pt", "nl"];

impl DecimalStyle {
    /// Derive the style from a locale tag such as `fr_FR`, `fr-FR` or `fr`.
    ///
    /// Only the language subtag is considered. Unknown or empty tags fall
    /// back to [`DecimalStyle::Point`].
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if COMMA_LANGUAGES.contains(&language.as_str()) {
            Self::Comma
        } else {
            Self::Point
        }
    }

    /// Format an amount with exactly two fraction digits in this style.
    ///
    /// No thousands grouping is applied in either style.
    #[must_use]
    pub fn format_amount(self, amount: f64) -> String {
        let formatted = format!("{amount:.2}");
        match self {
            Self::Point => formatted,
            Self::Comma => formatted.replace('.', ","),
        }
    }
}
