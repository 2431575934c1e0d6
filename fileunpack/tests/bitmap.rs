mod common;

use common::{TestFrame, d3gr, test_palette};
use fileunpack::bitmap::{FileHeader, InfoHeader, PIXEL_DATA_OFFSET, padded_row_len};
use fileunpack::{Canvas, Error, GraphicResource, Palette, encode_frame};

fn single_frame_bitmap(frame: TestFrame, palette: &Palette) -> fileunpack::Result<Vec<u8>> {
    let resource = d3gr(&[frame]);
    let graphic = GraphicResource::parse(&resource)?;
    encode_frame(&graphic.frames()[0], &resource, palette)
}

#[test]
fn two_by_two_black_and_white() {
    // Top row: black, white. Bottom row: white, black.
    let frame = TestFrame::with_pixels(2, 2, &[0, 1, 1, 0]);
    let bmp = single_frame_bitmap(frame, &test_palette()).unwrap();

    let padded = padded_row_len(2);
    assert_eq!(padded, 8);
    assert_eq!(bmp.len(), 54 + padded * 2);

    let header = FileHeader::decode(&bmp).unwrap().expect("BM tag");
    assert_eq!(header.file_size as usize, 54 + padded * 2);
    assert_eq!(header.data_offset as usize, PIXEL_DATA_OFFSET);

    #[rustfmt::skip]
    let expected: [u8; 16] = [
        0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, // bottom row
        0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, // top row
    ];
    assert_eq!(&bmp[54..], &expected);
}

#[test]
fn headers_are_bit_exact() {
    let bmp = single_frame_bitmap(TestFrame::filled(3, 1, 1), &test_palette()).unwrap();

    assert_eq!(&bmp[0..2], b"BM");
    assert_eq!(&bmp[2..6], &(54u32 + 12).to_le_bytes());
    assert_eq!(&bmp[6..10], &[0, 0, 0, 0]);
    assert_eq!(&bmp[10..14], &54u32.to_le_bytes());
    assert_eq!(&bmp[14..18], &40u32.to_le_bytes());

    let info = InfoHeader::decode(&bmp[14..]).unwrap();
    assert_eq!(
        info,
        InfoHeader {
            width: 3,
            height: 1,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 256,
            important_colors: 0,
        }
    );
}

#[test]
fn channels_are_written_bgr() {
    let palette = test_palette();
    let [r, g, b] = palette.get(2).unwrap();
    let bmp = single_frame_bitmap(TestFrame::filled(1, 1, 2), &palette).unwrap();
    assert_eq!(&bmp[54..57], &[b, g, r]);
    assert_eq!(&bmp[57..58], &[0]);
}

#[test]
fn rows_are_padded_to_four_bytes() {
    for width in 1..=8usize {
        let padded = padded_row_len(width);
        assert_eq!(padded % 4, 0);
        assert!(padded >= width * 3 && padded < width * 3 + 4);
    }

    let bmp = single_frame_bitmap(TestFrame::filled(5, 3, 1), &test_palette()).unwrap();
    assert_eq!(bmp.len(), 54 + 16 * 3);
}

#[test]
fn pixel_index_beyond_palette_fails() {
    let short = Palette::new(vec![[0, 0, 0]; 200]);
    let frame = TestFrame::with_pixels(2, 1, &[3, 200]);

    match single_frame_bitmap(frame, &short) {
        Err(Error::PixelIndexOutOfRange {
            frame,
            index,
            palette_len,
        }) => {
            assert_eq!(frame, 0);
            assert_eq!(index, 200);
            assert_eq!(palette_len, 200);
        }
        other => panic!("expected pixel index error, got {other:?}"),
    }
}

#[test]
fn pixels_beyond_resource_fail() {
    let mut resource = d3gr(&[TestFrame::filled(4, 4, 1)]);
    let graphic_frames = fileunpack::frames::parse(&resource).unwrap();
    resource.truncate(resource.len() - 1);

    assert!(matches!(
        encode_frame(&graphic_frames[0], &resource, &test_palette()),
        Err(Error::PixelDataOutOfBounds { frame: 0, .. })
    ));
}

#[test]
fn canvas_blit_clips_to_bounds() {
    let palette = test_palette();
    let resource = d3gr(&[TestFrame::filled(3, 3, 1)]);
    let graphic = GraphicResource::parse(&resource).unwrap();
    let frame = &graphic.frames()[0];

    let mut canvas = Canvas::new(4, 4, [9, 9, 9]);
    canvas
        .blit_indexed(2, 2, frame, graphic.pixels(0).unwrap(), &palette)
        .unwrap();

    assert_eq!(canvas.pixel(1, 1), Some([9, 9, 9]));
    assert_eq!(canvas.pixel(2, 2), Some([255, 255, 255]));
    assert_eq!(canvas.pixel(3, 3), Some([255, 255, 255]));
    assert_eq!(canvas.pixel(4, 4), None);
}
