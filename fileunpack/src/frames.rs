//! D3GR frame table parsing.
//!
//! Layout of a graphic resource, all fields little-endian:
//!
//! ```text
//! 0x00  "D3GR"
//! 0x18  u16 frame count
//! 0x1C  u32 offset per frame, relative to the end of this table
//! ....  frames: 16-byte header (height u16 at +0x0C, width u16 at +0x0E)
//!       followed by width * height palette indices, row-major, top row first
//! ```

use crate::error::{Error, Result};
use crate::reader::{ByteReader, u16_at, u32_at};

pub const FRAME_COUNT_OFFSET: usize = 0x18;
pub const OFFSET_TABLE_START: usize = 0x1C;
pub const FRAME_HEADER_SIZE: usize = 0x10;

const HEIGHT_OFFSET: usize = 0x0C;
const WIDTH_OFFSET: usize = 0x0E;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDescriptor {
    pub index: usize,
    /// Position of the frame header, relative to the start of the resource.
    pub byte_offset: usize,
    pub width: u16,
    pub height: u16,
}

impl FrameDescriptor {
    /// Position of the first pixel, relative to the start of the resource.
    pub fn pixel_offset(&self) -> usize {
        self.byte_offset + FRAME_HEADER_SIZE
    }

    pub fn pixel_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// One past the last pixel byte.
    pub fn end(&self) -> usize {
        self.pixel_offset() + self.pixel_len()
    }

    /// Borrow this frame's indexed pixels out of its resource.
    pub fn pixels<'a>(&self, resource: &'a [u8]) -> Result<&'a [u8]> {
        ByteReader::at(resource, self.pixel_offset())
            .read_bytes(self.pixel_len())
            .map_err(|_| Error::PixelDataOutOfBounds {
                frame: self.index,
                need: self.end(),
                have: resource.len(),
            })
    }
}

fn malformed(offset: usize, reason: &'static str) -> Error {
    Error::MalformedFrameTable { offset, reason }
}

pub fn frame_count(resource: &[u8]) -> Result<u16> {
    u16_at(resource, FRAME_COUNT_OFFSET)
        .map_err(|_| malformed(FRAME_COUNT_OFFSET, "frame count outside resource"))
}

fn table_end(count: u16) -> usize {
    OFFSET_TABLE_START + count as usize * 4
}

/// Read the descriptor of frame `index` from a table of `count` frames.
pub fn read_frame(resource: &[u8], count: u16, index: usize) -> Result<FrameDescriptor> {
    if index >= count as usize {
        return Err(Error::FrameIndexOutOfRange {
            index,
            count: count as usize,
        });
    }

    let entry = OFFSET_TABLE_START + index * 4;
    let relative = u32_at(resource, entry)
        .map_err(|_| malformed(entry, "offset table entry outside resource"))?;

    let byte_offset = table_end(count)
        .checked_add(relative as usize)
        .ok_or_else(|| malformed(entry, "frame offset overflows"))?;
    if byte_offset.saturating_add(FRAME_HEADER_SIZE) > resource.len() {
        return Err(malformed(byte_offset, "frame header outside resource"));
    }

    Ok(FrameDescriptor {
        index,
        byte_offset,
        width: u16_at(resource, byte_offset + WIDTH_OFFSET)?,
        height: u16_at(resource, byte_offset + HEIGHT_OFFSET)?,
    })
}

/// Parse every frame descriptor, in index order.
///
/// Fails as a whole if the table is empty or any frame header falls outside
/// `resource`.
pub fn parse(resource: &[u8]) -> Result<Vec<FrameDescriptor>> {
    let count = frame_count(resource)?;
    if count == 0 {
        return Err(malformed(FRAME_COUNT_OFFSET, "zero frames"));
    }
    if table_end(count) > resource.len() {
        return Err(malformed(OFFSET_TABLE_START, "offset table outside resource"));
    }

    (0..count as usize)
        .map(|index| read_frame(resource, count, index))
        .collect()
}

/// Size implied by the last frame: its header position, header and pixels.
pub(crate) fn declared_size(resource: &[u8]) -> Result<usize> {
    let count = frame_count(resource)?;
    if count == 0 {
        return Err(malformed(FRAME_COUNT_OFFSET, "zero frames"));
    }
    let last = read_frame(resource, count, count as usize - 1)?;
    Ok(last.end())
}

/// A graphic resource with its parsed frame table.
#[derive(Debug, Clone)]
pub struct GraphicResource<'a> {
    data: &'a [u8],
    frames: Vec<FrameDescriptor>,
}

impl<'a> GraphicResource<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let frames = parse(data)?;
        log::debug!("frame table: {} frames", frames.len());
        Ok(Self { data, frames })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn frames(&self) -> &[FrameDescriptor] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Result<&FrameDescriptor> {
        self.frames.get(index).ok_or(Error::FrameIndexOutOfRange {
            index,
            count: self.frames.len(),
        })
    }

    pub fn pixels(&self, index: usize) -> Result<&'a [u8]> {
        self.frame(index)?.pixels(self.data)
    }
}
