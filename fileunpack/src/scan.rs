//! Fixed-position signature matching.

/// A magic pattern compared bytewise at fixed offsets.
///
/// Bytes inside the optional skipped range are not compared, which lets a
/// pattern step over fields such as the RIFF size that sit inside the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pattern: &'static [u8],
    skip: Option<(usize, usize)>,
}

impl Signature {
    pub const fn new(pattern: &'static [u8]) -> Self {
        Self {
            pattern,
            skip: None,
        }
    }

    /// Leave bytes `start..end` of the pattern unchecked.
    pub const fn skipping(self, start: usize, end: usize) -> Self {
        Self {
            pattern: self.pattern,
            skip: Some((start, end)),
        }
    }

    /// Number of bytes a candidate position must have available.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    fn checks(&self, at: usize) -> bool {
        self.skip.is_none_or(|(start, end)| at < start || at >= end)
    }

    /// Whether `window` starts with this signature.
    pub fn matches(&self, window: &[u8]) -> bool {
        window.len() >= self.pattern.len()
            && self
                .pattern
                .iter()
                .zip(window)
                .enumerate()
                .all(|(at, (want, got))| !self.checks(at) || want == got)
    }
}

/// Find the first position at or after `from` where `signature` matches.
///
/// Returns an absolute offset into `buffer`. Positions with fewer than
/// `signature.len()` bytes left are never considered.
pub fn find(buffer: &[u8], from: usize, signature: &Signature) -> Option<usize> {
    if signature.is_empty() || from >= buffer.len() {
        return None;
    }
    buffer[from..]
        .windows(signature.len())
        .position(|window| signature.matches(window))
        .map(|pos| from + pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIFF: Signature = Signature::new(b"RIFF\0\0\0\0WAVE").skipping(4, 8);

    #[test]
    fn skips_unchecked_bytes() {
        let data = b"xxRIFF\xff\xff\xff\xffWAVEfmt ";
        assert_eq!(find(data, 0, &RIFF), Some(2));
    }

    #[test]
    fn advancing_start_finds_next_match() {
        let mut data = b"RIFF....WAVE".to_vec();
        data.extend_from_slice(b"--RIFF....WAVE");
        assert_eq!(find(&data, 0, &RIFF), Some(0));
        assert_eq!(find(&data, 1, &RIFF), Some(14));
        assert_eq!(find(&data, 15, &RIFF), None);
    }

    #[test]
    fn partial_match_at_end_is_not_found() {
        let data = b"0123RIFF....WAV";
        assert_eq!(find(data, 0, &RIFF), None);
        assert_eq!(find(data, 100, &RIFF), None);
    }
}
