//! Avatar color and initial helpers for signed-in users without a photo.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Stable `hsl(..)` color derived from `seed` (usually the email).
///
/// Uses 32-bit shift arithmetic over UTF-16 units, so the same address always
/// gets the same hue across sessions and browsers.
#[must_use]
pub fn avatar_color(seed: &str) -> String {
    let mut hash: i64 = 0;
    for unit in seed.encode_utf16() {
        #[allow(clippy::cast_possible_truncation)]
        let shifted = i64::from((hash as i32).wrapping_shl(5));
        hash = i64::from(unit) + (shifted - hash);
    }
    let hue = (hash % 360).abs();
    format!("hsl({hue}, 70%, 50%)")
}

/// Upper-cased first character of `email`, or empty when absent.
#[must_use]
pub fn avatar_initial(email: Option<&str>) -> String {
    email
        .and_then(|e| e.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
