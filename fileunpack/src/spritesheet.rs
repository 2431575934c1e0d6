//! Shelf packing of all frames of a graphic resource into one bitmap.

use crate::bitmap::Canvas;
use crate::error::{Error, Result};
use crate::frames::FrameDescriptor;
use crate::palette::Palette;

/// Largest canvas width or height a spritesheet may have.
pub const MAX_CANVAS_DIMENSION: u32 = 8192;

const BACKGROUND: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Top-left placement of every frame on a shared canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedLayout {
    /// Indexed like the frames that were laid out.
    pub placements: Vec<(u32, u32)>,
    pub width: u32,
    pub height: u32,
}

/// Row width aiming at a roughly square sheet:
/// `floor(sqrt(sum(width) * max(height)))`.
pub fn target_row_width(sizes: &[(u16, u16)]) -> u32 {
    let total_width: u64 = sizes.iter().map(|&(w, _)| w as u64).sum();
    let max_height = sizes.iter().map(|&(_, h)| h as u64).max().unwrap_or(0);
    (total_width * max_height).isqrt() as u32
}

/// Lay out `(width, height)` sizes with [`target_row_width`].
pub fn layout(sizes: &[(u16, u16)]) -> Result<PackedLayout> {
    layout_with_row_width(sizes, target_row_width(sizes))
}

/// Place sizes left to right in index order, starting a new row whenever the
/// next one would cross `row_width`. A row always takes at least one item.
pub fn layout_with_row_width(sizes: &[(u16, u16)], row_width: u32) -> Result<PackedLayout> {
    let row_width = row_width as u64;
    let (mut x, mut y, mut row_height) = (0u64, 0u64, 0u64);
    let (mut width, mut height) = (0u64, 0u64);
    let mut placements = Vec::with_capacity(sizes.len());

    for &(w, h) in sizes {
        let (w, h) = (w as u64, h as u64);
        if x + w > row_width && x > 0 {
            x = 0;
            y += row_height;
            row_height = 0;
        }

        placements.push((x, y));

        x += w;
        row_height = row_height.max(h);
        width = width.max(x);
        height = height.max(y + row_height);
    }

    let limit = MAX_CANVAS_DIMENSION as u64;
    if width > limit || height > limit {
        return Err(Error::LayoutTooLarge {
            width: width.min(u32::MAX as u64) as u32,
            height: height.min(u32::MAX as u64) as u32,
            limit: MAX_CANVAS_DIMENSION,
        });
    }

    // Every coordinate is bounded by the canvas size checked above.
    Ok(PackedLayout {
        placements: placements
            .into_iter()
            .map(|(x, y)| (x as u32, y as u32))
            .collect(),
        width: width as u32,
        height: height as u32,
    })
}

/// A composed spritesheet and the layout used to build it.
#[derive(Debug, Clone)]
pub struct Spritesheet {
    pub layout: PackedLayout,
    /// Complete BMP file.
    pub bitmap: Vec<u8>,
}

/// Pack every frame of one resource into a single BMP.
///
/// `resource` is the graphic resource the descriptors were parsed from.
/// Uncovered canvas pixels are white.
pub fn pack(
    frames: &[FrameDescriptor],
    resource: &[u8],
    palette: &Palette,
) -> Result<Spritesheet> {
    let sizes: Vec<(u16, u16)> = frames.iter().map(|f| (f.width, f.height)).collect();
    let layout = layout(&sizes)?;

    let mut canvas = Canvas::new(layout.width, layout.height, BACKGROUND);
    for (frame, &(x, y)) in frames.iter().zip(&layout.placements) {
        let pixels = frame.pixels(resource)?;
        canvas.blit_indexed(x, y, frame, pixels, palette)?;
    }

    log::debug!(
        "spritesheet with {} frames, {}x{}",
        frames.len(),
        layout.width,
        layout.height
    );

    Ok(Spritesheet {
        bitmap: canvas.to_bmp(),
        layout,
    })
}
