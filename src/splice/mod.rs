//! Marker detection and block replacement

use crate::error::{Result, VersionsError};

pub const BEGIN_MARKER: &str = "<autogenerated>";
pub const END_MARKER: &str = "</autogenerated>";

/// Zero-based line indices of the begin and end marker lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan {
    pub begin: usize,
    pub end: usize,
}

/// Locate the single begin/end marker pair in `lines`.
///
/// Each token must appear on exactly one line and the begin line must come
/// first.
pub fn find_markers<S: AsRef<str>>(lines: &[S]) -> Result<MarkerSpan> {
    let begin = single_line_with(lines, BEGIN_MARKER)?;
    let end = single_line_with(lines, END_MARKER)?;
    if end < begin {
        return Err(VersionsError::MarkersOutOfOrder { begin: begin + 1, end: end + 1 });
    }
    Ok(MarkerSpan { begin, end })
}

/// Replace the block from the begin marker through the end marker, inclusive.
pub fn splice_block<S: AsRef<str>>(lines: &[S], replacement: &[String]) -> Result<Vec<String>> {
    let span = find_markers(lines)?;
    tracing::debug!(
        "Replacing lines {}..={} with {} rendered lines",
        span.begin + 1,
        span.end + 1,
        replacement.len()
    );

    let mut out = Vec::with_capacity(lines.len() - (span.end - span.begin + 1) + replacement.len());
    out.extend(lines[..span.begin].iter().map(|l| l.as_ref().to_string()));
    out.extend(replacement.iter().cloned());
    out.extend(lines[span.end + 1..].iter().map(|l| l.as_ref().to_string()));
    Ok(out)
}

fn single_line_with<S: AsRef<str>>(lines: &[S], marker: &'static str) -> Result<usize> {
    let found: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.as_ref().contains(marker))
        .map(|(idx, _)| idx)
        .collect();

    match found.as_slice() {
        [] => Err(VersionsError::MarkerNotFound { marker }),
        [idx] => Ok(*idx),
        _ => Err(VersionsError::DuplicateMarker {
            marker,
            lines: found.iter().map(|idx| idx + 1).collect(),
        }),
    }
}
