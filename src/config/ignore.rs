/// Splits a comma-separated ignore list into trimmed tokens, keeping input order.
/// Blank tokens are dropped, duplicates are kept.
pub fn parse_ignore_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
