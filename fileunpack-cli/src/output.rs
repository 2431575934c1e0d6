//! On-disk layout for extracted resources.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fileunpack::FormatKind;

const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Folder-safe version of a container path: file name only, reserved and
/// control characters removed.
pub fn clean_folder_name(container: &str) -> String {
    let file_name = container
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(container);
    let cleaned: String = file_name
        .chars()
        .filter(|c| !RESERVED.contains(c) && !c.is_control())
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "container".to_string()
    } else {
        cleaned.to_string()
    }
}

fn format_folder(format: FormatKind) -> &'static str {
    match format {
        FormatKind::AudioContainer => "extracted_wav",
        FormatKind::GraphicResource => "extracted_gr",
    }
}

/// `<out>/extracted_<wav|gr>/<container>/` and the names inside it.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    root: PathBuf,
    extension: &'static str,
}

impl OutputLayout {
    pub fn new(out: &Path, format: FormatKind, container: &Path) -> Self {
        let root = out
            .join(format_folder(format))
            .join(clean_folder_name(&container.to_string_lossy()));
        Self {
            root,
            extension: format.extension(),
        }
    }

    /// Like [`OutputLayout::new`], creating the root directory.
    pub fn create(out: &Path, format: FormatKind, container: &Path) -> Result<Self> {
        let layout = Self::new(out, format, container);
        std::fs::create_dir_all(&layout.root)
            .with_context(|| format!("failed to create {}", layout.root.display()))?;
        log::debug!("writing to {}", layout.root.display());
        Ok(layout)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_path(&self, n: usize) -> PathBuf {
        let ext = self.extension;
        self.root.join(format!("{ext}_{n}.{ext}"))
    }

    pub fn frames_dir(&self, n: usize) -> PathBuf {
        self.root.join(format!("frames_{n}"))
    }

    pub fn frame_path(&self, n: usize, index: usize) -> PathBuf {
        self.frames_dir(n).join(format!("frame_{index}.bmp"))
    }

    pub fn spritesheet_path(&self, n: usize) -> PathBuf {
        self.root.join(format!("spritesheet_{n}.bmp"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_paths_and_reserved_characters() {
        assert_eq!(clean_folder_name("RES.006"), "RES.006");
        assert_eq!(clean_folder_name("/games/sanitarium/RES.007"), "RES.007");
        assert_eq!(clean_folder_name(r"C:\GAMES\RES.008"), "RES.008");
        assert_eq!(clean_folder_name("a<b>c:d\"e|f?g*h"), "abcdefgh");
        assert_eq!(clean_folder_name("bad\u{7}name\t"), "badname");
        assert_eq!(clean_folder_name("dir/"), "container");
        assert_eq!(clean_folder_name(".."), "container");
    }

    #[test]
    fn names_follow_format_and_index() {
        let out = Path::new("out");
        let container = Path::new("data/RES.006");
        let graphic = OutputLayout::new(out, FormatKind::GraphicResource, container);
        assert_eq!(graphic.root(), Path::new("out/extracted_gr/RES.006"));
        assert_eq!(graphic.raw_path(3), Path::new("out/extracted_gr/RES.006/d3gr_3.d3gr"));
        assert_eq!(
            graphic.frame_path(3, 12),
            Path::new("out/extracted_gr/RES.006/frames_3/frame_12.bmp")
        );
        assert_eq!(
            graphic.spritesheet_path(0),
            Path::new("out/extracted_gr/RES.006/spritesheet_0.bmp")
        );

        let audio = OutputLayout::new(out, FormatKind::AudioContainer, Path::new("SOUND.BIN"));
        assert_eq!(audio.raw_path(0), Path::new("out/extracted_wav/SOUND.BIN/wav_0.wav"));
    }

    #[test]
    fn create_makes_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let layout =
            OutputLayout::create(dir.path(), FormatKind::AudioContainer, Path::new("RES.007"))
                .unwrap();
        assert!(layout.root().is_dir());
        assert!(layout.root().ends_with("extracted_wav/RES.007"));
    }
}
