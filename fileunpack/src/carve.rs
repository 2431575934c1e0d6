//! Greedy left-to-right carving of embedded resources.

use std::ops::Range;

use crate::error::Error;
use crate::format::FormatKind;
use crate::scan;

/// Byte range of one embedded resource within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpan {
    pub offset: usize,
    pub length: usize,
    /// Size the resource claims, raised to the format's minimum header size.
    /// `None` when the header fields needed to compute it were out of bounds.
    pub declared_length: Option<usize>,
    pub format: FormatKind,
}

impl ResourceSpan {
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Cut short by the end of the container, or of unknown real size.
    pub fn is_truncated(&self) -> bool {
        self.declared_length.is_none_or(|declared| declared > self.length)
    }

    /// This span's bytes, if `buffer` is long enough to hold them.
    pub fn slice<'a>(&self, buffer: &'a [u8]) -> Option<&'a [u8]> {
        buffer.get(self.range())
    }
}

/// Why a span's length differs from what its header claims.
enum Irregularity {
    Undersized(usize),
    Truncated,
    Unreadable(Error),
}

/// Size the match at `start`. `None` if the format's minimum header does not
/// fit in the bytes left.
fn size_at(
    buffer: &[u8],
    start: usize,
    format: FormatKind,
) -> Option<(ResourceSpan, Option<Irregularity>)> {
    let min_header = format.min_header_size();
    let available = buffer.len() - start;
    if available < min_header {
        return None;
    }

    let (length, declared_length, irregularity) = match format.declared_size(&buffer[start..]) {
        Ok(declared) if declared < min_header => (
            min_header,
            Some(min_header),
            Some(Irregularity::Undersized(declared)),
        ),
        Ok(declared) if declared > available => {
            (available, Some(declared), Some(Irregularity::Truncated))
        }
        Ok(declared) => (declared, Some(declared), None),
        Err(e) => (available, None, Some(Irregularity::Unreadable(e))),
    };

    let span = ResourceSpan {
        offset: start,
        length,
        declared_length,
        format,
    };
    Some((span, irregularity))
}

fn report(span: &ResourceSpan, irregularity: &Irregularity) {
    let (format, start) = (span.format, span.offset);
    match irregularity {
        Irregularity::Undersized(declared) => log::warn!(
            "{format} at {start:#x} declares {declared} bytes, less than its {}-byte header",
            format.min_header_size()
        ),
        Irregularity::Truncated => log::warn!(
            "{format} at {start:#x} appears truncated: declared {} bytes, only {} available",
            span.declared_length.unwrap_or(span.length),
            span.length
        ),
        Irregularity::Unreadable(e) => log::warn!(
            "{format} at {start:#x} has an unreadable size ({e}), taking the remaining {} bytes",
            span.length
        ),
    }
}

/// Find every resource of one format in `buffer`.
///
/// Each match is sized by its format rule and scanning resumes right after
/// it, so spans of one format never overlap. A span whose declared size runs
/// past the end of `buffer` is clamped to the bytes available.
pub fn carve(buffer: &[u8], format: FormatKind) -> Vec<ResourceSpan> {
    carve_all(buffer, &[format]).spans
}

/// Spans of several formats merged into one non-overlapping sequence.
#[derive(Debug, Clone, Default)]
pub struct Carving {
    /// Accepted spans, ordered by offset.
    pub spans: Vec<ResourceSpan>,
    /// Matches that start inside an accepted span, ordered by offset.
    pub rejected: Vec<ResourceSpan>,
}

/// Carve several formats in one left-to-right pass.
///
/// The earliest match of any format is sized and accepted, and scanning
/// resumes at its end. A match starting inside an accepted span is rejected
/// and its format is searched again from the next byte, so a false signature
/// inside a resource never hides the resources after it. Ties on offset go
/// to the format listed first in `formats`.
pub fn carve_all(buffer: &[u8], formats: &[FormatKind]) -> Carving {
    let mut next: Vec<Option<usize>> = formats
        .iter()
        .map(|format| scan::find(buffer, 0, format.signature()))
        .collect();
    let mut carving = Carving::default();
    let mut position = 0;

    while let Some((slot, start)) = next
        .iter()
        .enumerate()
        .filter_map(|(slot, found)| found.map(|start| (slot, start)))
        .min_by_key(|&(_, start)| start)
    {
        let format = formats[slot];
        let Some((span, irregularity)) = size_at(buffer, start, format) else {
            log::debug!(
                "{format} signature at {start:#x} has only {} bytes left, stopping",
                buffer.len() - start
            );
            next[slot] = None;
            continue;
        };

        if start < position {
            if let Some(kept) = carving.spans.last() {
                log::warn!(
                    "{format} at {start:#x} lies inside {} at {:#x}, rejecting it",
                    kept.format,
                    kept.offset
                );
            }
            carving.rejected.push(span);
            next[slot] = scan::find(buffer, start + 1, format.signature());
            continue;
        }

        if let Some(irregularity) = &irregularity {
            report(&span, irregularity);
        }
        log::debug!("{format} at {start:#x}, {} bytes", span.length);
        carving.spans.push(span);
        position = span.end();
        next[slot] = scan::find(buffer, position, format.signature());
    }

    carving
}
