#![allow(dead_code)]

use fileunpack::Palette;

/// A frame for [`d3gr`]: width, height and its palette indices.
pub struct TestFrame {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<u8>,
}

impl TestFrame {
    pub fn filled(width: u16, height: u16, index: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![index; width as usize * height as usize],
        }
    }

    pub fn with_pixels(width: u16, height: u16, pixels: &[u8]) -> Self {
        assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels: pixels.to_vec(),
        }
    }
}

/// Build a D3GR resource with frames stored back to back.
pub fn d3gr(frames: &[TestFrame]) -> Vec<u8> {
    let mut out = b"D3GR".to_vec();
    out.resize(0x18, 0);
    out.extend_from_slice(&(frames.len() as u16).to_le_bytes());
    out.extend_from_slice(&[0, 0]);

    let mut relative = 0u32;
    for frame in frames {
        out.extend_from_slice(&relative.to_le_bytes());
        relative += 16 + frame.pixels.len() as u32;
    }

    for frame in frames {
        let mut header = [0u8; 16];
        header[0x0C..0x0E].copy_from_slice(&frame.height.to_le_bytes());
        header[0x0E..0x10].copy_from_slice(&frame.width.to_le_bytes());
        out.extend_from_slice(&header);
        out.extend_from_slice(&frame.pixels);
    }
    out
}

/// Build a RIFF/WAVE blob of `total` bytes whose size field declares `total`.
pub fn wav(total: usize) -> Vec<u8> {
    assert!(total >= 16);
    let mut out = b"RIFF".to_vec();
    out.extend_from_slice(&((total - 8) as u32).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.resize(total, 0x11);
    out
}

/// Index 0 black, index 1 white, everything else a distinct color.
pub fn test_palette() -> Palette {
    let mut colors = vec![[0u8; 3]; 256];
    colors[1] = [255, 255, 255];
    for (i, color) in colors.iter_mut().enumerate().skip(2) {
        *color = [i as u8, 0x80, 255 - i as u8];
    }
    Palette::new(colors)
}
