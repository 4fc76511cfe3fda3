//! Parsing of query-string filters.

/// Number of entries returned by the top skills endpoint when no usable limit is given
pub const DEFAULT_TOP_SKILLS_LIMIT: u64 = 10;

/// Split a comma-separated skill filter into lowercase names.
///
/// Entries are trimmed and empty entries are dropped, so `"React, ,node"` yields
/// `["react", "node"]`. An empty result means no filter should be applied.
pub fn parse_skill_filter(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Parse the `limit` query parameter, falling back to the default on anything unusable.
///
/// Missing, non-numeric, zero and negative values all yield [`DEFAULT_TOP_SKILLS_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> u64 {
    raw.and_then(|limit| limit.trim().parse::<u64>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_TOP_SKILLS_LIMIT)
}

/// Build a lowercase `%term%` pattern with `LIKE` wildcards in the term escaped by `\`.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    pattern
}
