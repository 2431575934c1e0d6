//! Resource carver for undifferentiated container files.
//!
//! Locates embedded RIFF/WAVE audio and D3GR graphic resources by signature,
//! sizes them from their own headers, and decodes D3GR frames into 24-bit BMP
//! files or a packed spritesheet.
//!
//! # Example
//!
//! ```ignore
//! use fileunpack::{FormatKind, GraphicResource, PaletteTable, carve, encode_frame};
//!
//! let data = std::fs::read("RES.006").unwrap();
//! let palettes = PaletteTable::builtin();
//! let palette = palettes.lookup("RES.006").palette;
//!
//! for span in carve(&data, FormatKind::GraphicResource) {
//!     let bytes = span.slice(&data).unwrap();
//!     let resource = GraphicResource::parse(bytes).unwrap();
//!     for frame in resource.frames() {
//!         let bmp = encode_frame(frame, bytes, palette).unwrap();
//!         println!("frame {}: {}x{}, {} bytes", frame.index, frame.width, frame.height, bmp.len());
//!     }
//! }
//! ```

pub mod bitmap;
mod carve;
mod error;
mod extract;
mod format;
pub mod frames;
mod palette;
pub mod reader;
pub mod scan;
pub mod spritesheet;

pub use bitmap::{Canvas, encode_frame};
pub use carve::{Carving, ResourceSpan, carve, carve_all};
pub use error::{Error, Result};
pub use extract::{ExtractOptions, Extracted, GraphicOutput, decode_graphic, extract};
pub use format::FormatKind;
pub use frames::{FrameDescriptor, GraphicResource};
pub use palette::{PALETTE_LEN, Palette, PaletteMatch, PaletteTable};
pub use spritesheet::{MAX_CANVAS_DIMENSION, PackedLayout, Spritesheet, pack};
