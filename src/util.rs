/// Trait extension utility for [`str`].
pub trait StrExtension {
    /// Returns `true` if `needle` is a prefix of the string regardless of its case.
    fn starts_with_ignore_case(&self, needle: &str) -> bool;

    /// Returns a string slice with the prefix removed regardless of its case.
    fn strip_prefix_ignore_case(&self, prefix: &str) -> Option<&Self>;
}

impl StrExtension for str {
    fn starts_with_ignore_case(&self, needle: &str) -> bool {
        let n = needle.len();
        self.len() >= n && self.is_char_boundary(n) && needle.eq_ignore_ascii_case(&self[..n])
    }

    fn strip_prefix_ignore_case(&self, prefix: &str) -> Option<&Self> {
        self.starts_with_ignore_case(prefix)
            .then(|| &self[prefix.len()..])
            .filter(|s| !s.is_empty())
    }
}

/// Formats a float in its shortest round-trippable decimal form, so `1.0` becomes `1` and `0.70`
/// becomes `0.7`.
///
/// Non-finite values have no representation in the format and are written as `0`.
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        log::warn!("non-finite value {value} cannot be encoded, writing 0 instead");
        return "0".to_string();
    }
    if value == 0.0 {
        // avoids `-0`
        return "0".to_string();
    }
    value.to_string()
}
