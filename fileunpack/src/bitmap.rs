//! Uncompressed 24-bit BMP encoding.
//!
//! Headers are written field by field in little-endian order. Pixel rows are
//! stored bottom row first as B,G,R triples, each row zero-padded to a
//! multiple of 4 bytes.

use crate::error::{Error, Result};
use crate::frames::FrameDescriptor;
use crate::palette::Palette;
use crate::reader::ByteReader;

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const BM: u16 = u16::from_le_bytes(*b"BM");

/// Byte length of one padded pixel row.
pub fn padded_row_len(width: usize) -> usize {
    (width * 3 + 3) & !3
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_size: u32,
    pub data_offset: u32,
}

impl FileHeader {
    pub fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&BM.to_le_bytes());
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&0u16.to_le_bytes());
        out.extend_from_slice(&self.data_offset.to_le_bytes());
    }

    /// Returns `None` if the `BM` tag is missing.
    pub fn decode(bytes: &[u8]) -> Result<Option<Self>> {
        let mut reader = ByteReader::new(bytes);
        if reader.read_u16()? != BM {
            return Ok(None);
        }
        let file_size = reader.read_u32()?;
        let _reserved1 = reader.read_u16()?;
        let _reserved2 = reader.read_u16()?;
        let data_offset = reader.read_u32()?;
        Ok(Some(Self {
            file_size,
            data_offset,
        }))
    }
}

/// BITMAPINFOHEADER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    /// Header for an uncompressed, bottom-up 24-bit image.
    pub fn rgb24(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 256,
            important_colors: 0,
        }
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.important_colors.to_le_bytes());
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(bytes);
        let _header_size = reader.read_u32()?;
        Ok(Self {
            width: reader.read_u32()? as i32,
            height: reader.read_u32()? as i32,
            planes: reader.read_u16()?,
            bits_per_pixel: reader.read_u16()?,
            compression: reader.read_u32()?,
            image_size: reader.read_u32()?,
            x_pixels_per_meter: reader.read_u32()? as i32,
            y_pixels_per_meter: reader.read_u32()? as i32,
            colors_used: reader.read_u32()?,
            important_colors: reader.read_u32()?,
        })
    }
}

/// A top-down B,G,R pixel buffer without row padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Canvas filled with a single B,G,R color.
    pub fn new(width: u32, height: u32, fill: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        let data = fill.iter().copied().cycle().take(pixels * 3).collect();
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// B,G,R bytes of the pixel at `(x, y)`, top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let at = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[at], self.data[at + 1], self.data[at + 2]])
    }

    /// Draw a frame's palette indices with its top-left corner at `(x, y)`.
    ///
    /// Parts of the frame outside the canvas are clipped. Every index is
    /// checked against the palette, clipped or not.
    pub fn blit_indexed(
        &mut self,
        x: u32,
        y: u32,
        frame: &FrameDescriptor,
        pixels: &[u8],
        palette: &Palette,
    ) -> Result<()> {
        let width = frame.width as usize;
        if pixels.len() < frame.pixel_len() {
            return Err(Error::PixelDataOutOfBounds {
                frame: frame.index,
                need: frame.pixel_len(),
                have: pixels.len(),
            });
        }
        if width == 0 {
            return Ok(());
        }

        let canvas_width = self.width as usize;
        let visible = canvas_width.saturating_sub(x as usize).min(width);

        for (row, src) in pixels[..frame.pixel_len()].chunks_exact(width).enumerate() {
            let dst_row = y as usize + row;
            for (col, &index) in src.iter().enumerate() {
                let [r, g, b] = palette.get(index).ok_or(Error::PixelIndexOutOfRange {
                    frame: frame.index,
                    index,
                    palette_len: palette.len(),
                })?;
                if col >= visible || dst_row >= self.height as usize {
                    continue;
                }
                let at = (dst_row * canvas_width + x as usize + col) * 3;
                self.data[at..at + 3].copy_from_slice(&[b, g, r]);
            }
        }
        Ok(())
    }

    /// Serialize as a complete BMP file.
    pub fn to_bmp(&self) -> Vec<u8> {
        let row_len = self.width as usize * 3;
        let padded = padded_row_len(self.width as usize);
        let image_size = padded * self.height as usize;

        let mut out = Vec::with_capacity(PIXEL_DATA_OFFSET + image_size);
        FileHeader {
            file_size: (PIXEL_DATA_OFFSET + image_size) as u32,
            data_offset: PIXEL_DATA_OFFSET as u32,
        }
        .encode(&mut out);
        InfoHeader::rgb24(self.width, self.height).encode(&mut out);

        if row_len > 0 {
            for row in self.data.chunks_exact(row_len).rev() {
                out.extend_from_slice(row);
                out.resize(out.len() + padded - row_len, 0);
            }
        }
        out
    }
}

/// Encode one frame of a graphic resource as a BMP file.
///
/// `resource` is the whole graphic resource the descriptor was parsed from.
pub fn encode_frame(
    frame: &FrameDescriptor,
    resource: &[u8],
    palette: &Palette,
) -> Result<Vec<u8>> {
    let pixels = frame.pixels(resource)?;
    let mut canvas = Canvas::new(frame.width as u32, frame.height as u32, [0, 0, 0]);
    canvas.blit_indexed(0, 0, frame, pixels, palette)?;
    Ok(canvas.to_bmp())
}
