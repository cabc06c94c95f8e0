//! Token cleanup before alias lookup.

/// Clean a raw rank token into its comparison form.
///
/// Trims, lower-cases, folds `ё` into `е` and drops whitespace, hyphens,
/// underscores and periods anywhere in the token: `" Д-1 "` and `"д1"` both
/// become `"д1"`.
pub fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|&c| !is_separator(c))
        .map(|c| if c == 'ё' { 'е' } else { c })
        .collect()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '.')
}
