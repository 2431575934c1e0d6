//! In-memory extraction of carved resources.
//!
//! Produces the artifacts for every resource of one format without touching
//! the file system. Failures are kept next to the unit they belong to: a bad
//! frame does not hide the others, and a bad frame table or oversized
//! spritesheet affects only its own resource.

use crate::bitmap::encode_frame;
use crate::carve::{ResourceSpan, carve};
use crate::error::Result;
use crate::format::FormatKind;
use crate::frames::GraphicResource;
use crate::palette::Palette;
use crate::spritesheet::{Spritesheet, pack};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Encode one bitmap per frame.
    pub frames: bool,
    /// Compose all frames of a resource into one bitmap.
    pub spritesheet: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            frames: true,
            spritesheet: false,
        }
    }
}

/// Decoded output of one graphic resource.
#[derive(Debug)]
pub struct GraphicOutput {
    pub frame_count: usize,
    /// One entry per frame, in index order, when frames were requested.
    pub frames: Vec<Result<Vec<u8>>>,
    pub spritesheet: Option<Result<Spritesheet>>,
}

impl GraphicOutput {
    pub fn decoded_frames(&self) -> usize {
        self.frames.iter().filter(|f| f.is_ok()).count()
    }
}

#[derive(Debug)]
pub struct Extracted<'a> {
    pub span: ResourceSpan,
    /// Raw bytes of the resource, borrowed from the container.
    pub data: &'a [u8],
    /// Present for graphic resources; an error means the frame table could
    /// not be parsed.
    pub graphic: Option<Result<GraphicOutput>>,
}

impl Extracted<'_> {
    /// Frames declared by a successfully parsed graphic resource, else 0.
    pub fn frame_count(&self) -> usize {
        match &self.graphic {
            Some(Ok(output)) => output.frame_count,
            _ => 0,
        }
    }
}

/// Decode frames and/or a spritesheet for one graphic resource.
pub fn decode_graphic(
    data: &[u8],
    options: &ExtractOptions,
    palette: &Palette,
) -> Result<GraphicOutput> {
    let resource = GraphicResource::parse(data)?;

    let frames = if options.frames {
        resource
            .frames()
            .iter()
            .map(|frame| {
                encode_frame(frame, data, palette).inspect_err(|e| {
                    log::warn!("frame {} not decoded: {e}", frame.index);
                })
            })
            .collect()
    } else {
        Vec::new()
    };

    let spritesheet = options.spritesheet.then(|| {
        pack(resource.frames(), data, palette).inspect_err(|e| {
            log::warn!("spritesheet not created: {e}");
        })
    });

    Ok(GraphicOutput {
        frame_count: resource.frame_count(),
        frames,
        spritesheet,
    })
}

/// Carve `buffer` for `format` and decode every resource found.
pub fn extract<'a>(
    buffer: &'a [u8],
    format: FormatKind,
    options: &ExtractOptions,
    palette: &Palette,
) -> Vec<Extracted<'a>> {
    carve(buffer, format)
        .into_iter()
        .filter_map(|span| {
            let data = span.slice(buffer)?;
            let graphic = (format == FormatKind::GraphicResource).then(|| {
                decode_graphic(data, options, palette).inspect_err(|e| {
                    log::warn!("{format} at {:#x}: {e}", span.offset);
                })
            });
            Some(Extracted {
                span,
                data,
                graphic,
            })
        })
        .collect()
}
