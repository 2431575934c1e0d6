//! Palettes recovered from the Sanitarium RES.* containers.
//!
//! RES.006 has 226 known entries; the remainder is zero-filled.

pub(super) static RES_006: [[u8; 3]; 256] = [
    [0x00, 0x00, 0x00], [0xFC, 0xFC, 0xFC], [0xFC, 0xF4, 0xC4], [0xD4, 0xFC, 0xFC],
    [0xFC, 0xF4, 0x94], [0xE8, 0xE8, 0xE8], [0xE8, 0xE0, 0xFC], [0xFC, 0xF0, 0x1C],
    [0xFC, 0xF0, 0x18], [0xB8, 0xE0, 0xFC], [0xD4, 0xD4, 0xD4], [0xA8, 0xE4, 0xFC],
    [0xEC, 0xD0, 0xA0], [0xB8, 0xF0, 0x8C], [0xE4, 0xDC, 0x58], [0xD0, 0xD0, 0xD0],
    [0xB0, 0xE4, 0x84], [0xC4, 0xC4, 0xC4], [0xE0, 0xD0, 0x1C], [0xE8, 0xC8, 0x2C],
    [0xEC, 0xC8, 0x1C], [0xE4, 0xB8, 0x80], [0xC8, 0xB8, 0xB4], [0xA8, 0xD4, 0x74],
    [0xE0, 0xAC, 0x94], [0x9C, 0xD0, 0x70], [0xC4, 0xAC, 0xA4], [0xB8, 0xB8, 0xB8],
    [0x80, 0xBC, 0xFC], [0xC4, 0xA8, 0x9C], [0xC0, 0xBC, 0x34], [0xCC, 0x9C, 0x84],
    [0xD4, 0xAC, 0x1C], [0xDC, 0xA8, 0x28], [0xDC, 0xA4, 0x24], [0x8C, 0xC0, 0x64],
    [0xD8, 0xA4, 0x24], [0xB8, 0xA0, 0x98], [0xA4, 0xA4, 0xA4], [0xDC, 0x84, 0x6C],
    [0x64, 0xC4, 0x30], [0xC0, 0x90, 0x78], [0x80, 0xB4, 0x5C], [0xA8, 0x90, 0x88],
    [0xC8, 0x8C, 0x28], [0xA8, 0x8C, 0x9C], [0xC8, 0x88, 0x2C], [0xB4, 0x98, 0x34],
    [0xB0, 0x90, 0x44], [0x94, 0x94, 0x94], [0x94, 0x94, 0x80], [0x88, 0x84, 0xC4],
    [0xB0, 0x84, 0x68], [0xBC, 0x7C, 0x64], [0xB8, 0x70, 0x9C], [0x64, 0xAC, 0x34],
    [0xB4, 0x84, 0x24], [0x84, 0x80, 0xB8], [0x98, 0x7C, 0x90], [0x70, 0x9C, 0x40],
    [0x94, 0x80, 0x78], [0xBC, 0x74, 0x2C], [0x80, 0x80, 0x80], [0xA0, 0x74, 0x5C],
    [0xA8, 0x68, 0x88], [0x78, 0x78, 0xA8], [0xA0, 0x74, 0x38], [0xC0, 0x58, 0x40],
    [0x5C, 0x94, 0x34], [0x88, 0x6C, 0x80], [0x84, 0x70, 0x68], [0xA4, 0x68, 0x28],
    [0x70, 0x70, 0x9C], [0x68, 0x78, 0x74], [0x9C, 0x5C, 0x7C], [0xA8, 0x60, 0x2C],
    [0xA8, 0x60, 0x20], [0x94, 0x64, 0x50], [0x70, 0x70, 0x70], [0x5C, 0x80, 0x38],
    [0x8C, 0x5C, 0x6C], [0x80, 0x60, 0x74], [0x68, 0x64, 0x90], [0x9C, 0x60, 0x1C],
    [0x40, 0x8C, 0x1C], [0x84, 0x68, 0x20], [0x98, 0x58, 0x50], [0x84, 0x68, 0x20],
    [0x60, 0x70, 0x64], [0x74, 0x60, 0x58], [0x78, 0x5C, 0x64], [0x48, 0x7C, 0x24],
    [0xD4, 0x2C, 0x24], [0x90, 0x58, 0x18], [0x80, 0x58, 0x44], [0x88, 0x54, 0x34],
    [0x54, 0x68, 0x5C], [0x78, 0x60, 0x1C], [0x5C, 0x5C, 0x80], [0x98, 0x48, 0x2C],
    [0x5C, 0x5C, 0x80], [0x34, 0x80, 0x14], [0x74, 0x60, 0x0C], [0x5C, 0x5C, 0x5C],
    [0x58, 0x54, 0x94], [0x80, 0x4C, 0x64], [0x94, 0x44, 0x2C], [0x70, 0x58, 0x1C],
    [0x80, 0x54, 0x10], [0x70, 0x58, 0x1C], [0x64, 0x54, 0x50], [0x54, 0x54, 0x74],
    [0x84, 0x48, 0x24], [0x68, 0x4C, 0x60], [0xA8, 0x30, 0x24], [0x74, 0x4C, 0x3C],
    [0x50, 0x48, 0x9C], [0x78, 0x50, 0x10], [0x6C, 0x4C, 0x58], [0x5C, 0x54, 0x44],
    [0x84, 0x44, 0x2C], [0x4C, 0x58, 0x54], [0x70, 0x48, 0x54], [0x5C, 0x5C, 0x0C],
    [0x84, 0x3C, 0x2C], [0x30, 0x6C, 0x14], [0x68, 0x54, 0x0C], [0xAC, 0x28, 0x1C],
    [0x68, 0x4C, 0x18], [0xFC, 0x00, 0x00], [0x44, 0x54, 0x48], [0x6C, 0x4C, 0x0C],
    [0x4C, 0x48, 0x68], [0x74, 0x40, 0x2C], [0x54, 0x54, 0x08], [0x48, 0x48, 0x68],
    [0x68, 0x3C, 0x48], [0x58, 0x44, 0x50], [0x50, 0x48, 0x44], [0x5C, 0x48, 0x18],
    [0x44, 0x3C, 0x80], [0x60, 0x40, 0x28], [0x74, 0x34, 0x24], [0x28, 0x60, 0x10],
    [0x3C, 0x4C, 0x40], [0x78, 0x30, 0x14], [0x4C, 0x4C, 0x08], [0x5C, 0x40, 0x08],
    [0x60, 0x3C, 0x14], [0x54, 0x40, 0x14], [0x50, 0x3C, 0x38], [0x54, 0x40, 0x18],
    [0xD0, 0x00, 0x00], [0x40, 0x3C, 0x58], [0x58, 0x34, 0x40], [0x68, 0x30, 0x1C],
    [0x3C, 0x34, 0x70], [0x50, 0x40, 0x10], [0x34, 0x44, 0x38], [0x50, 0x3C, 0x04],
    [0x40, 0x44, 0x08], [0x4C, 0x38, 0x18], [0x50, 0x34, 0x10], [0x54, 0x2C, 0x34],
    [0x4C, 0x34, 0x18], [0x48, 0x38, 0x14], [0x48, 0x38, 0x04], [0x34, 0x30, 0x5C],
    [0x48, 0x30, 0x38], [0xAC, 0x00, 0x00], [0x30, 0x3C, 0x34], [0x3C, 0x3C, 0x08],
    [0x18, 0x48, 0x08], [0x44, 0x30, 0x14], [0x44, 0x30, 0x0C], [0x4C, 0x28, 0x0C],
    [0x44, 0x28, 0x2C], [0x38, 0x38, 0x04], [0x40, 0x28, 0x28], [0x3C, 0x30, 0x14],
    [0x28, 0x28, 0x4C], [0x24, 0x34, 0x2C], [0x38, 0x2C, 0x20], [0x38, 0x2C, 0x08],
    [0x80, 0x00, 0x00], [0x30, 0x30, 0x04], [0x24, 0x24, 0x44], [0x18, 0x38, 0x04],
    [0x34, 0x24, 0x08], [0x74, 0x00, 0x00], [0x1C, 0x2C, 0x24], [0x38, 0x1C, 0x20],
    [0x34, 0x20, 0x08], [0x6C, 0x00, 0x00], [0x68, 0x00, 0x00], [0x28, 0x28, 0x04],
    [0x60, 0x00, 0x00], [0x1C, 0x1C, 0x34], [0x58, 0x00, 0x00], [0x28, 0x20, 0x04],
    [0x2C, 0x18, 0x14], [0x14, 0x24, 0x18], [0x0C, 0x28, 0x00], [0x28, 0x18, 0x18],
    [0x50, 0x00, 0x00], [0x1C, 0x20, 0x00], [0x48, 0x00, 0x00], [0x44, 0x00, 0x00],
    [0x18, 0x1C, 0x10], [0x44, 0x00, 0x00], [0x1C, 0x18, 0x00], [0x04, 0x20, 0x00],
    [0x40, 0x00, 0x00], [0x14, 0x10, 0x28], [0x20, 0x10, 0x10], [0x38, 0x00, 0x00],
    [0x38, 0x00, 0x00], [0x18, 0x14, 0x14], [0x30, 0x00, 0x00], [0x08, 0x18, 0x00],
    [0x14, 0x14, 0x00], [0x0C, 0x0C, 0x1C], [0x28, 0x00, 0x00], [0x08, 0x10, 0x08],
    [0x10, 0x08, 0x08], [0x0C, 0x0C, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
];

pub(super) static RES_007: [[u8; 3]; 256] = [
    [0x00, 0x00, 0x00], [0xFC, 0xFC, 0xF4], [0xFC, 0xF4, 0xF4], [0xF4, 0xF4, 0xF4],
    [0xF4, 0xF4, 0xEC], [0xF4, 0xEC, 0xEC], [0xF4, 0xEC, 0xE4], [0xEC, 0xEC, 0xE4],
    [0xEC, 0xEC, 0xDC], [0xEC, 0xE4, 0xDC], [0xEC, 0xE4, 0xD4], [0xE4, 0xE4, 0xD4],
    [0xE4, 0xDC, 0xD4], [0xE4, 0xDC, 0xCC], [0xE4, 0xD4, 0xCC], [0xE4, 0xD4, 0xC4],
    [0xDC, 0xD4, 0xC4], [0xDC, 0xD4, 0xBC], [0xDC, 0xCC, 0xBC], [0xDC, 0xCC, 0xB4],
    [0xD4, 0xCC, 0xBC], [0xD4, 0xCC, 0xB4], [0xD4, 0xC4, 0xB4], [0xD4, 0xC4, 0xAC],
    [0xD4, 0xC4, 0xA4], [0xCC, 0xC4, 0xAC], [0xCC, 0xBC, 0xA4], [0xD4, 0xBC, 0x8C],
    [0xCC, 0xBC, 0x9C], [0xC4, 0xBC, 0x9C], [0xD4, 0xB4, 0x8C], [0xCC, 0xB4, 0x9C],
    [0xD4, 0xB4, 0x84], [0xCC, 0xB4, 0x94], [0xD4, 0xB4, 0x78], [0xCC, 0xB4, 0x8C],
    [0xC4, 0xB4, 0x9C], [0xCC, 0xB4, 0x84], [0xC4, 0xB4, 0x94], [0xCC, 0xB4, 0x78],
    [0xC4, 0xB4, 0x8C], [0xC4, 0xB4, 0x84], [0xC0, 0xB8, 0xA0], [0xC0, 0xB8, 0x98],
    [0xCC, 0xAC, 0x84], [0xC4, 0xAC, 0x94], [0xCC, 0xAC, 0x78], [0xC4, 0xAC, 0x8C],
    [0xCC, 0xAC, 0x70], [0xC4, 0xAC, 0x84], [0xC0, 0xB0, 0x98], [0xC4, 0xAC, 0x78],
    [0xC0, 0xB0, 0x90], [0xC4, 0xAC, 0x70], [0xC0, 0xB0, 0x88], [0xC0, 0xB0, 0x7C],
    [0xB8, 0xB0, 0x90], [0xC4, 0xA4, 0x78], [0xC0, 0xA8, 0x90], [0xC4, 0xA4, 0x70],
    [0xC0, 0xA8, 0x88], [0xC4, 0xA4, 0x68], [0xC0, 0xA8, 0x7C], [0xB8, 0xA8, 0x90],
    [0xC0, 0xA8, 0x74], [0xB8, 0xA8, 0x88], [0xC0, 0xA8, 0x6C], [0xB8, 0xA8, 0x7C],
    [0xB8, 0xA8, 0x74], [0xB0, 0xA8, 0x88], [0xC0, 0xA0, 0x74], [0xC0, 0xA0, 0x6C],
    [0xB8, 0xA0, 0x7C], [0xC0, 0xA0, 0x64], [0xB0, 0xA0, 0x90], [0xB8, 0xA0, 0x74],
    [0xB0, 0xA0, 0x88], [0xB8, 0xA0, 0x6C], [0xB0, 0xA0, 0x7C], [0xB8, 0xA0, 0x64],
    [0xB0, 0xA0, 0x74], [0xA8, 0xA0, 0x88], [0xB0, 0xA0, 0x6C], [0xB8, 0x98, 0x6C],
    [0xB8, 0x98, 0x64], [0xB0, 0x98, 0x74], [0xB0, 0x98, 0x6C], [0xA8, 0x98, 0x7C],
    [0xB0, 0x98, 0x64], [0xA8, 0x98, 0x74], [0xA8, 0x98, 0x6C], [0xA8, 0x98, 0x64],
    [0xA0, 0x98, 0x7C], [0xB0, 0x90, 0x64], [0xB0, 0x90, 0x5C], [0xA8, 0x90, 0x6C],
    [0xA8, 0x90, 0x64], [0xA0, 0x90, 0x74], [0xA8, 0x90, 0x5C], [0xA0, 0x90, 0x6C],
    [0xA8, 0x90, 0x50], [0xA0, 0x90, 0x64], [0xA0, 0x90, 0x5C], [0xA8, 0x88, 0x5C],
    [0xA8, 0x88, 0x50], [0xA0, 0x88, 0x64], [0x98, 0x88, 0x74], [0xA0, 0x88, 0x5C],
    [0x98, 0x88, 0x6C], [0xA0, 0x88, 0x54], [0x98, 0x88, 0x64], [0x98, 0x88, 0x5C],
    [0x90, 0x88, 0x6C], [0x98, 0x88, 0x54], [0x90, 0x88, 0x64], [0xA0, 0x7C, 0x54],
    [0x98, 0x7C, 0x64], [0x98, 0x7C, 0x5C], [0x98, 0x7C, 0x54], [0x90, 0x7C, 0x64],
    [0x98, 0x7C, 0x48], [0x90, 0x7C, 0x5C], [0x90, 0x7C, 0x54], [0x90, 0x7C, 0x4C],
    [0x88, 0x7C, 0x5C], [0x98, 0x74, 0x48], [0x90, 0x74, 0x5C], [0x90, 0x74, 0x54],
    [0x90, 0x74, 0x4C], [0x88, 0x74, 0x5C], [0x88, 0x74, 0x54], [0x7C, 0x74, 0x64],
    [0x88, 0x74, 0x4C], [0x7C, 0x74, 0x54], [0x88, 0x6C, 0x54], [0x88, 0x6C, 0x4C],
    [0x88, 0x6C, 0x40], [0x7C, 0x6C, 0x5C], [0x7C, 0x6C, 0x54], [0x7C, 0x6C, 0x4C],
    [0x7C, 0x6C, 0x44], [0x74, 0x6C, 0x54], [0x74, 0x6C, 0x4C], [0x7C, 0x64, 0x4C],
    [0x7C, 0x64, 0x44], [0x74, 0x64, 0x4C], [0x74, 0x64, 0x44], [0x6C, 0x64, 0x54],
    [0x74, 0x64, 0x3C], [0x6C, 0x64, 0x4C], [0x6C, 0x64, 0x44], [0x74, 0x5C, 0x44],
    [0x74, 0x5C, 0x3C], [0x6C, 0x5C, 0x4C], [0x6C, 0x5C, 0x44], [0x6C, 0x5C, 0x3C],
    [0x64, 0x5C, 0x44], [0x64, 0x5C, 0x3C], [0x6C, 0x54, 0x3C], [0x6C, 0x54, 0x30],
    [0x64, 0x54, 0x44], [0x64, 0x54, 0x3C], [0x5C, 0x54, 0x4C], [0x64, 0x54, 0x34],
    [0x5C, 0x54, 0x44], [0x5C, 0x54, 0x3C], [0x5C, 0x54, 0x34], [0x64, 0x4C, 0x34],
    [0x5C, 0x4C, 0x3C], [0x5C, 0x4C, 0x34], [0x54, 0x4C, 0x44], [0x5C, 0x4C, 0x28],
    [0x54, 0x4C, 0x3C], [0x54, 0x4C, 0x34], [0x54, 0x4C, 0x2C], [0x4C, 0x4C, 0x3C],
    [0x54, 0x44, 0x34], [0x54, 0x44, 0x2C], [0x4C, 0x44, 0x3C], [0x4C, 0x44, 0x34],
    [0x4C, 0x44, 0x2C], [0x44, 0x44, 0x3C], [0x44, 0x44, 0x2C], [0x4C, 0x3C, 0x34],
    [0x4C, 0x3C, 0x2C], [0x4C, 0x3C, 0x20], [0x44, 0x3C, 0x34], [0x44, 0x3C, 0x2C],
    [0x44, 0x3C, 0x24], [0x40, 0x40, 0x38], [0x40, 0x40, 0x2C], [0x40, 0x40, 0x24],
    [0x44, 0x34, 0x2C], [0x44, 0x34, 0x24], [0x40, 0x38, 0x2C], [0x40, 0x38, 0x24],
    [0x40, 0x38, 0x1C], [0x38, 0x38, 0x30], [0x38, 0x38, 0x24], [0x38, 0x38, 0x1C],
    [0x40, 0x2C, 0x24], [0x40, 0x2C, 0x1C], [0x38, 0x30, 0x30], [0x38, 0x30, 0x24],
    [0x38, 0x30, 0x1C], [0x30, 0x30, 0x28], [0x30, 0x30, 0x1C], [0x38, 0x24, 0x1C],
    [0x30, 0x28, 0x28], [0x30, 0x28, 0x1C], [0x30, 0x28, 0x14], [0x28, 0x28, 0x28],
    [0x28, 0x28, 0x20], [0x28, 0x28, 0x14], [0x28, 0x20, 0x20], [0x28, 0x20, 0x14],
    [0x20, 0x20, 0x20], [0x20, 0x20, 0x14], [0x20, 0x20, 0x0C], [0x20, 0x14, 0x14],
    [0x20, 0x14, 0x0C], [0x18, 0x18, 0x18], [0x18, 0x18, 0x0C], [0x18, 0x00, 0x0C],
    [0xFC, 0xFC, 0xFC], [0x10, 0x10, 0x10], [0x10, 0x10, 0x00], [0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0x00], [0x00, 0x00, 0xFC],
];
