//! Position-based editing shared by every ordered list in the record.

/// Returns `list` with the trimmed `input` appended; blank input leaves the
/// list unchanged. Duplicates are allowed.
pub fn append_item(list: &[String], input: &str) -> Vec<String> {
    let mut next = list.to_vec();
    let trimmed = input.trim();
    if !trimmed.is_empty() {
        next.push(trimmed.to_string());
    }
    next
}

/// Returns `list` without the element at `index`; out-of-range indices leave
/// it unchanged.
pub fn remove_at<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    let mut next = list.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}
