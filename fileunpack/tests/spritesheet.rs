mod common;

use common::{TestFrame, d3gr, test_palette};
use fileunpack::bitmap::{FileHeader, InfoHeader, padded_row_len};
use fileunpack::spritesheet::{layout, layout_with_row_width, target_row_width};
use fileunpack::{
    Error, FrameDescriptor, GraphicResource, MAX_CANVAS_DIMENSION, PackedLayout, pack,
};

fn assert_no_overlap(sizes: &[(u16, u16)], layout: &PackedLayout) {
    for (i, &(xi, yi)) in layout.placements.iter().enumerate() {
        let (wi, hi) = (sizes[i].0 as u32, sizes[i].1 as u32);
        assert!(xi + wi <= layout.width && yi + hi <= layout.height);
        for (j, &(xj, yj)) in layout.placements.iter().enumerate().skip(i + 1) {
            let (wj, hj) = (sizes[j].0 as u32, sizes[j].1 as u32);
            let disjoint = xi + wi <= xj || xj + wj <= xi || yi + hi <= yj || yj + hj <= yi;
            assert!(disjoint, "frames {i} and {j} overlap");
        }
    }
}

#[test]
fn two_frames_share_a_wide_row() {
    let sizes = [(4, 4), (4, 4)];
    let layout = layout_with_row_width(&sizes, 8).unwrap();
    assert_eq!(layout.placements, vec![(0, 0), (4, 0)]);
    assert_eq!((layout.width, layout.height), (8, 4));
}

#[test]
fn heuristic_width_wraps_two_squares() {
    let sizes = [(4, 4), (4, 4)];
    assert_eq!(target_row_width(&sizes), 5);

    let layout = layout(&sizes).unwrap();
    assert_eq!(layout.placements, vec![(0, 0), (0, 4)]);
    assert_eq!((layout.width, layout.height), (4, 8));
}

#[test]
fn rows_take_the_tallest_frame() {
    let sizes = [(3, 2), (3, 5), (3, 1), (2, 2)];
    let layout = layout_with_row_width(&sizes, 6).unwrap();
    assert_eq!(layout.placements, vec![(0, 0), (3, 0), (0, 5), (3, 5)]);
    assert_eq!((layout.width, layout.height), (6, 7));
    assert_no_overlap(&sizes, &layout);
}

#[test]
fn wide_frame_gets_its_own_row() {
    let sizes = [(2, 2), (20, 1), (2, 2)];
    let layout = layout_with_row_width(&sizes, 10).unwrap();
    assert_eq!(layout.placements, vec![(0, 0), (0, 2), (0, 3)]);
    assert_eq!((layout.width, layout.height), (20, 5));
    assert_no_overlap(&sizes, &layout);
}

#[test]
fn many_frames_never_overlap() {
    let sizes: Vec<(u16, u16)> = (0..40u16).map(|i| (1 + i % 7 * 3, 1 + i % 5 * 4)).collect();
    let layout = layout(&sizes).unwrap();
    assert_eq!(layout.placements.len(), sizes.len());
    assert_no_overlap(&sizes, &layout);
}

#[test]
fn oversized_layout_is_rejected() {
    let sizes = [(9000, 1)];
    assert!(matches!(
        layout(&sizes),
        Err(Error::LayoutTooLarge {
            width: 9000,
            height: 1,
            limit: MAX_CANVAS_DIMENSION,
        })
    ));

    let tall: Vec<(u16, u16)> = vec![(100, 5000); 4];
    assert!(matches!(
        layout_with_row_width(&tall, 100),
        Err(Error::LayoutTooLarge { height: 20000, .. })
    ));
}

#[test]
fn pack_rejects_oversized_layout_before_reading_pixels() {
    let frames = [FrameDescriptor {
        index: 0,
        byte_offset: 0,
        width: 8193,
        height: 1,
    }];
    assert!(matches!(
        pack(&frames, &[], &test_palette()),
        Err(Error::LayoutTooLarge { .. })
    ));
}

#[test]
fn pack_composes_frames_onto_white_canvas() {
    let palette = test_palette();
    // 2x2 black, then a 1x1 frame of color 5 below it; the rest of its row stays white.
    let resource = d3gr(&[TestFrame::filled(2, 2, 0), TestFrame::filled(1, 1, 5)]);
    let graphic = GraphicResource::parse(&resource).unwrap();

    let sheet = pack(graphic.frames(), &resource, &palette).unwrap();
    // sqrt(3 * 2) = 2, so the second frame wraps.
    assert_eq!(sheet.layout.placements, vec![(0, 0), (0, 2)]);
    assert_eq!((sheet.layout.width, sheet.layout.height), (2, 3));

    let bmp = &sheet.bitmap;
    let header = FileHeader::decode(bmp).unwrap().unwrap();
    let padded = padded_row_len(2);
    assert_eq!(header.file_size as usize, 54 + padded * 3);
    let info = InfoHeader::decode(&bmp[14..]).unwrap();
    assert_eq!((info.width, info.height), (2, 3));

    let [r, g, b] = palette.get(5).unwrap();
    let rows: Vec<&[u8]> = bmp[54..].chunks_exact(padded).collect();
    // Bottom-up: first stored row is the frame-1 row.
    assert_eq!(&rows[0][..6], &[b, g, r, 0xFF, 0xFF, 0xFF]);
    assert_eq!(&rows[1][..6], &[0, 0, 0, 0, 0, 0]);
    assert_eq!(&rows[2][..6], &[0, 0, 0, 0, 0, 0]);
}

#[test]
fn pack_propagates_pixel_errors() {
    let short = fileunpack::Palette::new(vec![[1, 2, 3]; 4]);
    let resource = d3gr(&[TestFrame::filled(1, 1, 0), TestFrame::filled(2, 1, 9)]);
    let graphic = GraphicResource::parse(&resource).unwrap();

    assert!(matches!(
        pack(graphic.frames(), &resource, &short),
        Err(Error::PixelIndexOutOfRange {
            frame: 1,
            index: 9,
            ..
        })
    ));
}
