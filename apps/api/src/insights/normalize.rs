/// Normalizes a free-text enum value from the model: trims whitespace, strips
/// one pair of wrapping quotes, and upper-cases.
pub fn format_enum(value: &str) -> String {
    let trimmed = value.trim();
    let unquoted = trimmed
        .strip_prefix(['"', '\''])
        .unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix(['"', '\'']).unwrap_or(unquoted);
    unquoted.trim().to_uppercase()
}
