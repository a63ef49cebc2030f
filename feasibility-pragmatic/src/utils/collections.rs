/// Combines error results into single one keeping all errors.
pub fn combine_error_results<T: Clone>(results: &[Result<(), T>]) -> Result<(), Vec<T>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter()).collect::<Vec<T>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Returns duplicated items in sorted order.
pub fn get_duplicates<'a>(items: impl Iterator<Item = &'a String>) -> Option<Vec<String>> {
    let mut seen = std::collections::HashSet::<&String>::default();
    let mut duplicates = items.filter(|item| !seen.insert(*item)).cloned().collect::<Vec<_>>();

    duplicates.sort();
    duplicates.dedup();

    if duplicates.is_empty() { None } else { Some(duplicates) }
}
