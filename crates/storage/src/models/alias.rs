use super::decimal_text::is_blank;

/// Trims surrounding blanks (including the byte order mark) and lowercases.
pub(crate) fn normalize_alias(raw: &str) -> String {
    raw.trim_matches(is_blank).to_lowercase()
}

pub(crate) fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, value)| *value)
}
