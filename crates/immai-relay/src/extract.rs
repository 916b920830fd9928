//! Answer extraction from the answering process's stdout.
//!
//! Two stages: [`locate_marker`] finds where the marker line starts, then
//! [`extract_answer`] takes the text after it. A missing marker is not an
//! error; the whole trimmed output becomes the answer.

/// Result of searching stdout for the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSearch {
    /// Byte offset of the first marker line.
    Found { offset: usize },
    NotFound,
}

/// Find the first occurrence of `marker` that ends its line.
///
/// Only whitespace may follow the marker before the newline, so marker text
/// echoed inside the user's question is skipped. An empty marker never
/// matches.
pub fn locate_marker(output: &str, marker: &str) -> MarkerSearch {
    if marker.is_empty() {
        return MarkerSearch::NotFound;
    }
    output
        .match_indices(marker)
        .map(|(offset, _)| offset)
        .find(|&offset| ends_line(&output[offset + marker.len()..]))
        .map_or(MarkerSearch::NotFound, |offset| MarkerSearch::Found { offset })
}

fn ends_line(rest: &str) -> bool {
    match rest.find('\n') {
        Some(end) => rest[..end].trim().is_empty(),
        None => false,
    }
}

pub fn extract_answer(output: &str, marker: &str) -> String {
    match locate_marker(output, marker) {
        MarkerSearch::Found { offset } => output[offset + marker.len()..].trim().to_string(),
        MarkerSearch::NotFound => output.trim().to_string(),
    }
}
