// crates/splice_marker_region/src/lib.rs

use locate_marker_region::MarkerRegion;

/// Produces a new document in which the located region is replaced by
/// `replacement`, leaving the surrounding text unchanged.
///
/// The replaced span covers both markers: everything from the first byte of
/// the start marker through the last byte of the end marker is dropped and
/// the replacement stands in its place. A caller that wants either marker
/// retained includes it in the replacement text.
///
/// This is a pure function; `document` is not mutated and remains available
/// for comparison.
pub fn splice_marker_region(document: &str, region: &MarkerRegion, replacement: &str) -> String {
    let span = region.spliced_span();
    let mut output = String::with_capacity(document.len() - span.len() + replacement.len());
    output.push_str(&document[..span.start]);
    output.push_str(replacement);
    output.push_str(&document[span.end..]);
    output
}
