use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unexpected end of data at offset {offset:#x} (need {need} bytes, have {have})")]
    UnexpectedEof {
        offset: usize,
        need: usize,
        have: usize,
    },

    #[error("malformed frame table at offset {offset:#x}: {reason}")]
    MalformedFrameTable { offset: usize, reason: &'static str },

    #[error("frame index {index} out of range ({count} frames)")]
    FrameIndexOutOfRange { index: usize, count: usize },

    #[error("pixel data of frame {frame} out of bounds (need {need} bytes, have {have})")]
    PixelDataOutOfBounds {
        frame: usize,
        need: usize,
        have: usize,
    },

    #[error("frame {frame}: pixel index {index} has no palette entry ({palette_len} entries)")]
    PixelIndexOutOfRange {
        frame: usize,
        index: u8,
        palette_len: usize,
    },

    #[error("layout too large: {width}x{height} exceeds {limit}x{limit}")]
    LayoutTooLarge { width: u32, height: u32, limit: u32 },

    #[error("invalid palette data: {len} bytes is neither RGB nor RGBA")]
    InvalidPalette { len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
