//! Prefix filtering over option labels.

/// Indices of the labels a filter leaves visible.
///
/// Matching is case-insensitive prefix comparison; the empty filter keeps
/// every label. Extending the filter by a character can only shrink or
/// preserve the result, never grow it.
pub fn prefix_filter(filter: &str, labels: &[String]) -> Vec<usize> {
    let filter = filter.to_lowercase();
    labels
        .iter()
        .enumerate()
        .filter(|(_, label)| label.to_lowercase().starts_with(&filter))
        .map(|(index, _)| index)
        .collect()
}
