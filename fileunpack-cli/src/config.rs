//! TOML palette configuration.
//!
//! ```toml
//! default = "cave"
//!
//! [containers]
//! "LEVEL.DAT" = "cave"
//!
//! [palettes.cave]
//! file = "palettes/cave.pal"
//! ```
//!
//! Palette files are raw 768-byte RGB or 1024-byte RGBA dumps, resolved
//! relative to the config file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use fileunpack::{Palette, PaletteTable};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteConfig {
    pub default: Option<String>,
    #[serde(default)]
    pub containers: BTreeMap<String, String>,
    #[serde(default)]
    pub palettes: BTreeMap<String, PaletteSource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteSource {
    pub file: PathBuf,
}

impl PaletteConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Merge into `table`. Palettes load before mappings and the default is
    /// applied last, so both may name palettes defined in the same file.
    pub fn apply(&self, table: &mut PaletteTable, base_dir: &Path) -> Result<()> {
        for (name, source) in &self.palettes {
            let path = base_dir.join(&source.file);
            let bytes = fs::read(&path)
                .with_context(|| format!("failed to read palette {name} from {}", path.display()))?;
            let palette = Palette::from_raw(&bytes)
                .with_context(|| format!("palette {name} in {}", path.display()))?;
            log::debug!("loaded palette {name} from {}", path.display());
            table.insert_palette(name.clone(), palette);
        }

        for (container, palette) in &self.containers {
            table.map_container(container.clone(), palette.clone());
        }

        if let Some(default) = &self.default {
            if !table.set_default(default) {
                bail!("default palette {default} is not defined");
            }
        }
        Ok(())
    }
}

/// Built-in palettes, extended by the config file when one is given.
pub fn palette_table(config: Option<&Path>) -> Result<PaletteTable> {
    let mut table = PaletteTable::builtin();
    if let Some(path) = config {
        let base_dir = path.parent().unwrap_or(Path::new("."));
        PaletteConfig::load(path)?.apply(&mut table, base_dir)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fileunpack::PALETTE_LEN;

    fn write_palette(dir: &Path, name: &str, color: [u8; 3]) {
        let bytes: Vec<u8> = std::iter::repeat_n(color, PALETTE_LEN).flatten().collect();
        fs::write(dir.join(name), bytes).unwrap();
    }

    #[test]
    fn missing_config_keeps_builtins() {
        let table = palette_table(None).unwrap();
        assert_eq!(table.default_name(), "RES.007");
        assert!(table.get("RES.006").is_some());
    }

    #[test]
    fn config_adds_palettes_and_mappings() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pal")).unwrap();
        write_palette(&dir.path().join("pal"), "cave.pal", [10, 20, 30]);

        let config = dir.path().join("palettes.toml");
        fs::write(
            &config,
            r#"
default = "cave"

[containers]
"LEVEL.DAT" = "cave"
"RES.009" = "RES.007"

[palettes.cave]
file = "pal/cave.pal"
"#,
        )
        .unwrap();

        let table = palette_table(Some(&config)).unwrap();
        assert_eq!(table.default_name(), "cave");

        let found = table.lookup("some/dir/LEVEL.DAT");
        assert_eq!(found.name, "cave");
        assert_eq!(found.palette.get(255), Some([10, 20, 30]));

        assert_eq!(table.lookup("RES.009").name, "RES.007");
        assert_eq!(table.lookup("RES.008").name, "RES.006");
        assert!(table.lookup("UNKNOWN").fallback);
        assert_eq!(table.lookup("UNKNOWN").name, "cave");
    }

    #[test]
    fn undefined_default_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("palettes.toml");
        fs::write(&config, "default = \"nowhere\"\n").unwrap();

        let err = palette_table(Some(&config)).unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }

    #[test]
    fn bad_palette_length_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("short.pal"), [0u8; 100]).unwrap();
        let config = dir.path().join("palettes.toml");
        fs::write(&config, "[palettes.short]\nfile = \"short.pal\"\n").unwrap();

        assert!(palette_table(Some(&config)).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<PaletteConfig>("colour = 1\n").is_err());
    }
}
