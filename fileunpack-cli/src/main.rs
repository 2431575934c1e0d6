//! fileunpack CLI
//!
//! Scans container files for embedded WAV and D3GR resources and writes raw
//! copies, per-frame bitmaps and spritesheets to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use fileunpack::{ExtractOptions, Extracted, FormatKind, ResourceSpan, carve, carve_all};
use serde::Serialize;

mod config;
mod output;

use output::OutputLayout;

#[derive(Parser)]
#[command(name = "fileunpack")]
#[command(about = "Extract embedded WAV and D3GR resources from container files")]
#[command(version)]
struct Cli {
    /// Log per-resource diagnostics (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// RIFF/WAVE audio
    Wav,
    /// D3GR graphic resources
    D3gr,
}

impl From<FormatArg> for FormatKind {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Wav => FormatKind::AudioContainer,
            FormatArg::D3gr => FormatKind::GraphicResource,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ScanFormat {
    Wav,
    D3gr,
    /// Every format in one pass, matches inside earlier spans rejected
    All,
}

impl ScanFormat {
    fn single(self) -> Option<FormatKind> {
        match self {
            Self::Wav => Some(FormatKind::AudioContainer),
            Self::D3gr => Some(FormatKind::GraphicResource),
            Self::All => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List embedded resources without writing anything
    Scan {
        /// Container file to scan
        file: PathBuf,

        /// Format to look for
        #[arg(short, long, default_value = "all")]
        format: ScanFormat,

        /// Print a JSON manifest instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Extract embedded resources to disk
    Extract {
        /// Container file to extract from
        file: PathBuf,

        /// Format to extract
        #[arg(short, long, default_value = "d3gr")]
        format: FormatArg,

        /// Write one BMP per D3GR frame (default when --spritesheet is not given)
        #[arg(long)]
        frames: bool,

        /// Write one packed BMP spritesheet per D3GR resource
        #[arg(long)]
        spritesheet: bool,

        /// Palette name (default: chosen from the container file name)
        #[arg(short, long)]
        palette: Option<String>,

        /// TOML file with extra palettes and container mappings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// List known palettes and which containers use them
    Palettes {
        /// TOML file with extra palettes and container mappings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ScanEntry {
    format: &'static str,
    offset: usize,
    length: usize,
    declared_length: Option<usize>,
    truncated: bool,
}

impl From<&ResourceSpan> for ScanEntry {
    fn from(span: &ResourceSpan) -> Self {
        Self {
            format: span.format.extension(),
            offset: span.offset,
            length: span.length,
            declared_length: span.declared_length,
            truncated: span.is_truncated(),
        }
    }
}

#[derive(Serialize)]
struct ScanManifest {
    file: String,
    size: usize,
    resources: Vec<ScanEntry>,
    rejected: Vec<ScanEntry>,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read_container(path: &Path) -> Result<Vec<u8>> {
    let data = std::fs::read(path).with_context(|| format!("failed to open {}", path.display()))?;
    if data.is_empty() {
        bail!("{} is empty", path.display());
    }
    log::info!("{}: {} bytes", path.display(), data.len());
    Ok(data)
}

fn scan(file: &Path, format: ScanFormat, json: bool) -> Result<()> {
    let data = read_container(file)?;

    let (spans, rejected) = match format.single() {
        Some(format) => (carve(&data, format), Vec::new()),
        None => {
            let carving = carve_all(&data, &FormatKind::ALL);
            (carving.spans, carving.rejected)
        }
    };

    if json {
        let manifest = ScanManifest {
            file: file.display().to_string(),
            size: data.len(),
            resources: spans.iter().map(ScanEntry::from).collect(),
            rejected: rejected.iter().map(ScanEntry::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    println!("{:<6} {:>12} {:>12}  NOTE", "FORMAT", "OFFSET", "LENGTH");
    println!("{:-<50}", "");
    for span in &spans {
        let note = match span.declared_length {
            None => "size unreadable".to_string(),
            Some(declared) if declared > span.length => format!("truncated, declared {declared}"),
            Some(_) => String::new(),
        };
        println!(
            "{:<6} {:>#12x} {:>12}  {}",
            span.format.extension(),
            span.offset,
            span.length,
            note
        );
    }
    for span in &rejected {
        println!(
            "{:<6} {:>#12x} {:>12}  rejected (inside earlier span)",
            span.format.extension(),
            span.offset,
            span.length
        );
    }
    println!("{:-<50}", "");
    println!("{} resources, {} rejected", spans.len(), rejected.len());
    Ok(())
}

#[derive(Default)]
struct Totals {
    resources: usize,
    frames: usize,
    spritesheets: usize,
    failures: usize,
}

fn write_file(path: &Path, bytes: &[u8], totals: &mut Totals) -> bool {
    match std::fs::write(path, bytes) {
        Ok(()) => true,
        Err(e) => {
            log::error!("failed to write {}: {e}", path.display());
            totals.failures += 1;
            false
        }
    }
}

fn write_resource(layout: &OutputLayout, n: usize, item: &Extracted<'_>, totals: &mut Totals) {
    let raw_path = layout.raw_path(n);
    if !write_file(&raw_path, item.data, totals) {
        return;
    }
    totals.resources += 1;
    println!(
        "Found {} at {:#x}, {} bytes -> {}",
        item.span.format,
        item.span.offset,
        item.span.length,
        raw_path.display()
    );

    let output = match &item.graphic {
        None => return,
        Some(Ok(output)) => output,
        Some(Err(e)) => {
            log::error!("resource {n}: frames not decoded: {e}");
            totals.failures += 1;
            return;
        }
    };
    println!("  Resource contains {} frames", output.frame_count);

    if !output.frames.is_empty() {
        let dir = layout.frames_dir(n);
        if let Err(e) = std::fs::create_dir_all(&dir) {
            log::error!("failed to create {}: {e}", dir.display());
            totals.failures += 1;
        } else {
            let mut written = 0;
            for (i, frame) in output.frames.iter().enumerate() {
                match frame {
                    Ok(bitmap) => {
                        if write_file(&layout.frame_path(n, i), bitmap, totals) {
                            written += 1;
                        }
                    }
                    Err(e) => {
                        log::error!("resource {n} frame {i}: {e}");
                        totals.failures += 1;
                    }
                }
            }
            totals.frames += written;
            println!("  Extracted {written} frames to {}", dir.display());
        }
    }

    match &output.spritesheet {
        None => {}
        Some(Ok(sheet)) => {
            let path = layout.spritesheet_path(n);
            if write_file(&path, &sheet.bitmap, totals) {
                totals.spritesheets += 1;
                println!(
                    "  Spritesheet {}x{} -> {}",
                    sheet.layout.width,
                    sheet.layout.height,
                    path.display()
                );
            }
        }
        Some(Err(e)) => {
            log::error!("resource {n}: spritesheet not created: {e}");
            totals.failures += 1;
        }
    }
}

fn extract(
    file: &Path,
    format: FormatKind,
    frames: bool,
    spritesheet: bool,
    palette_name: Option<&str>,
    config: Option<&Path>,
    out: &Path,
) -> Result<()> {
    let table = config::palette_table(config)?;
    let data = read_container(file)?;

    let palette = match palette_name {
        Some(name) => table
            .get(name)
            .with_context(|| format!("unknown palette {name}"))?,
        None => {
            let found = table.lookup(&file.to_string_lossy());
            if found.fallback {
                log::info!("no palette mapped for {}, using {}", file.display(), found.name);
            } else {
                log::info!("using palette {}", found.name);
            }
            found.palette
        }
    };

    let options = ExtractOptions {
        frames: frames || !spritesheet,
        spritesheet,
    };

    println!("Searching for {} files...", format);
    let extracted = fileunpack::extract(&data, format, &options, palette);
    let layout = OutputLayout::create(out, format, file)?;
    println!("Output directory: {}", layout.root().display());

    let mut totals = Totals::default();
    for (n, item) in extracted.iter().enumerate() {
        write_resource(&layout, n, item, &mut totals);
    }

    println!("Extracted {} {} files", totals.resources, format);
    if totals.frames > 0 {
        println!("Total frames extracted: {}", totals.frames);
    }
    if totals.spritesheets > 0 {
        println!("Spritesheets created: {}", totals.spritesheets);
    }
    if totals.failures > 0 {
        log::warn!("{} items could not be extracted", totals.failures);
    }
    if totals.resources == 0 {
        println!("No files were extracted.");
    }
    Ok(())
}

fn palettes(config: Option<&Path>) -> Result<()> {
    let table = config::palette_table(config)?;

    println!("Palettes:");
    for name in table.names() {
        let marker = if name == table.default_name() {
            " (default)"
        } else {
            ""
        };
        println!("  {name}{marker}");
    }
    println!("Containers:");
    for (container, palette) in table.containers() {
        println!("  {container} -> {palette}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scan { file, format, json } => scan(&file, format, json),
        Commands::Extract {
            file,
            format,
            frames,
            spritesheet,
            palette,
            config,
            out,
        } => extract(
            &file,
            format.into(),
            frames,
            spritesheet,
            palette.as_deref(),
            config.as_deref(),
            &out,
        ),
        Commands::Palettes { config } => palettes(config.as_deref()),
    }
}
