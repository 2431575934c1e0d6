//! Color palettes and the container-name palette table.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};

mod builtin;

pub const PALETTE_LEN: usize = 256;

/// An ordered table of RGB colors indexed by pixel value.
///
/// Normally 256 entries. Shorter palettes are accepted and surface as
/// [`Error::PixelIndexOutOfRange`] when a frame uses a missing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Cow<'static, [[u8; 3]]>,
}

impl Palette {
    pub fn new(colors: Vec<[u8; 3]>) -> Self {
        Self {
            colors: Cow::Owned(colors),
        }
    }

    pub const fn from_static(colors: &'static [[u8; 3]]) -> Self {
        Self {
            colors: Cow::Borrowed(colors),
        }
    }

    /// Parse a raw palette dump: 256 RGB triples or 256 RGBA quads.
    ///
    /// Alpha is discarded.
    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        let stride = match bytes.len() {
            len if len == PALETTE_LEN * 3 => 3,
            len if len == PALETTE_LEN * 4 => 4,
            len => return Err(Error::InvalidPalette { len }),
        };
        let colors = bytes
            .chunks_exact(stride)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Ok(Self::new(colors))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// RGB color for a pixel index.
    pub fn get(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.get(index as usize).copied()
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }
}

/// Result of [`PaletteTable::lookup`].
#[derive(Debug, Clone, Copy)]
pub struct PaletteMatch<'t> {
    pub name: &'t str,
    pub palette: &'t Palette,
    /// No mapping existed for the container and the default was used.
    pub fallback: bool,
}

/// Named palettes plus a mapping from container file names to palette names.
#[derive(Debug, Clone)]
pub struct PaletteTable {
    palettes: BTreeMap<String, Palette>,
    containers: BTreeMap<String, String>,
    default_name: String,
    default: Palette,
}

impl PaletteTable {
    /// Table with a single palette, used as the default.
    pub fn new(name: impl Into<String>, default: Palette) -> Self {
        let default_name = name.into();
        let mut palettes = BTreeMap::new();
        palettes.insert(default_name.clone(), default.clone());
        Self {
            palettes,
            containers: BTreeMap::new(),
            default_name,
            default,
        }
    }

    /// The palettes known for the Sanitarium resource containers.
    pub fn builtin() -> Self {
        let mut table = Self::new("RES.007", Palette::from_static(&builtin::RES_007));
        table.insert_palette("RES.006", Palette::from_static(&builtin::RES_006));
        for container in ["RES.006", "RES.008", "RES.009"] {
            table.map_container(container, "RES.006");
        }
        table.map_container("RES.007", "RES.007");
        table
    }

    /// Add or replace a named palette.
    pub fn insert_palette(&mut self, name: impl Into<String>, palette: Palette) {
        let name = name.into();
        if name == self.default_name {
            self.default = palette.clone();
        }
        self.palettes.insert(name, palette);
    }

    pub fn map_container(&mut self, container: impl Into<String>, palette: impl Into<String>) {
        self.containers.insert(container.into(), palette.into());
    }

    /// Make `name` the fallback palette. Returns `false` if it is unknown.
    pub fn set_default(&mut self, name: &str) -> bool {
        match self.palettes.get(name) {
            Some(palette) => {
                self.default = palette.clone();
                self.default_name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }

    pub fn containers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.containers
            .iter()
            .map(|(container, palette)| (container.as_str(), palette.as_str()))
    }

    /// Palette for a container, matched on its file name only.
    pub fn lookup(&self, container: &str) -> PaletteMatch<'_> {
        let file_name = Path::new(container)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(container);

        let mapped = self.containers.get(file_name).and_then(|name| {
            let palette = self.palettes.get(name);
            if palette.is_none() {
                log::warn!("container {file_name} maps to unknown palette {name}");
            }
            palette.map(|palette| (name.as_str(), palette))
        });

        match mapped {
            Some((name, palette)) => PaletteMatch {
                name,
                palette,
                fallback: false,
            },
            None => PaletteMatch {
                name: &self.default_name,
                palette: &self.default,
                fallback: true,
            },
        }
    }
}

impl Default for PaletteTable {
    fn default() -> Self {
        Self::builtin()
    }
}
