// crates/locate_marker_region/src/lib.rs

use std::ops::Range;

use anyhow::Result;

/// The located span of a document, expressed as byte offsets.
///
/// `start` is the offset of the first occurrence of the start marker and
/// `end` is the offset of the first occurrence of the end marker found at or
/// after `start`, so `start <= end` always holds for a constructed region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRegion {
    pub start: usize,
    pub end: usize,
    end_marker_len: usize,
}

impl MarkerRegion {
    /// The byte range a splice replaces: from the first byte of the start
    /// marker through the last byte of the end marker. Both markers are
    /// consumed; a caller that wants a marker retained includes it in the
    /// replacement text.
    pub fn spliced_span(&self) -> Range<usize> {
        self.start..self.end + self.end_marker_len
    }

    /// Returns the region text as it currently appears in `document`,
    /// markers included.
    pub fn text<'a>(&self, document: &'a str) -> &'a str {
        &document[self.spliced_span()]
    }
}

/// Locates the first marker-delimited region in `document`.
///
/// The start marker's first occurrence is found, then the end marker is
/// searched for starting at that same index. An end-marker occurrence lying
/// strictly before the start marker never qualifies.
///
/// # Errors
///
/// Returns an error if either marker is empty, if the start marker does not
/// occur in the document, or if no end-marker occurrence exists at or after
/// the start marker's position.
pub fn locate_marker_region(
    document: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<MarkerRegion> {
    if start_marker.is_empty() {
        anyhow::bail!("Start marker must not be empty");
    }
    if end_marker.is_empty() {
        anyhow::bail!("End marker must not be empty");
    }

    let start = document
        .find(start_marker)
        .ok_or_else(|| anyhow::anyhow!("Start marker {:?} not found in document", start_marker))?;

    let end = document[start..]
        .find(end_marker)
        .map(|offset| start + offset)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "End marker {:?} not found after start marker {:?}",
                end_marker,
                start_marker
            )
        })?;

    Ok(MarkerRegion {
        start,
        end,
        end_marker_len: end_marker.len(),
    })
}
