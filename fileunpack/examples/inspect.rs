use fileunpack::{FormatKind, carve_all};
use fileunpack::frames::GraphicResource;
use std::fs;

fn main() {
    let path = std::env::args().nth(1).expect("Usage: inspect <container> [min-frames]");
    let data = fs::read(&path).expect("read file");

    // Only list graphic resources with at least this many frames
    let min_frames: usize = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let carving = carve_all(&data, &FormatKind::ALL);
    println!("{}: {} bytes, {} resources", path, data.len(), carving.spans.len());

    for span in &carving.spans {
        let bytes = span.slice(&data).expect("span in bounds");
        match span.format {
            FormatKind::AudioContainer => {
                println!("  {:#010x} wav  {} bytes", span.offset, span.length);
            }
            FormatKind::GraphicResource => {
                let resource = match GraphicResource::parse(bytes) {
                    Ok(resource) => resource,
                    Err(e) => {
                        println!("  {:#010x} d3gr {} bytes: {}", span.offset, span.length, e);
                        continue;
                    }
                };
                if resource.frame_count() < min_frames {
                    continue;
                }
                println!(
                    "  {:#010x} d3gr {} bytes, {} frames",
                    span.offset,
                    span.length,
                    resource.frame_count()
                );
                for frame in resource.frames() {
                    println!(
                        "    frame {}: {}x{} at +{:#x}",
                        frame.index, frame.width, frame.height, frame.byte_offset
                    );
                }
            }
        }
        if span.is_truncated() {
            println!("    (truncated, declared {:?})", span.declared_length);
        }
    }

    for span in &carving.rejected {
        println!(
            "  {:#010x} {} rejected: starts inside an earlier resource",
            span.offset,
            span.format.extension()
        );
    }
}
