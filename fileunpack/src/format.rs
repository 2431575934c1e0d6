//! Supported carving targets and their size rules.

use std::fmt;

use crate::error::Result;
use crate::frames;
use crate::reader::u32_at;
use crate::scan::Signature;

/// `RIFF` + 4 size bytes + `WAVE`.
pub const RIFF_WAVE: Signature = Signature::new(b"RIFF\0\0\0\0WAVE").skipping(4, 8);
pub const D3GR: Signature = Signature::new(b"D3GR");

/// The RIFF size field does not count the `RIFF` tag and itself.
const RIFF_PREFIX_LEN: usize = 8;
const RIFF_SIZE_OFFSET: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatKind {
    /// RIFF/WAVE audio.
    AudioContainer,
    /// D3GR multi-frame indexed-color graphic.
    GraphicResource,
}

impl FormatKind {
    pub const ALL: [FormatKind; 2] = [FormatKind::AudioContainer, FormatKind::GraphicResource];

    pub fn signature(&self) -> &'static Signature {
        match self {
            Self::AudioContainer => &RIFF_WAVE,
            Self::GraphicResource => &D3GR,
        }
    }

    /// Bytes that must be present at a match before its size is computed.
    pub fn min_header_size(&self) -> usize {
        match self {
            Self::AudioContainer => 16,
            Self::GraphicResource => frames::OFFSET_TABLE_START,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AudioContainer => "WAV Audio",
            Self::GraphicResource => "D3GR Graphic Resource",
        }
    }

    /// File extension used for raw copies.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::AudioContainer => "wav",
            Self::GraphicResource => "d3gr",
        }
    }

    /// Total length the resource starting at `resource[0]` claims for itself.
    ///
    /// `resource` runs to the end of the container. An error means the header
    /// fields the rule needs are not in bounds, so the size is unreliable.
    pub fn declared_size(&self, resource: &[u8]) -> Result<usize> {
        match self {
            Self::AudioContainer => {
                let size = u32_at(resource, RIFF_SIZE_OFFSET)? as usize;
                Ok(size.saturating_add(RIFF_PREFIX_LEN))
            }
            Self::GraphicResource => frames::declared_size(resource),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
