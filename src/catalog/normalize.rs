use unicode_normalization::UnicodeNormalization;

/// Fold a name for accent- and case-insensitive comparison: canonical
/// decomposition, combining diacritical marks (U+0300..=U+036F) dropped,
/// then lowercased.
///
/// `"Épée du Chevalier"` becomes `"epee du chevalier"`.
pub fn normalize_text(text: &str) -> String {
    text.nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect::<String>()
        .to_lowercase()
}
