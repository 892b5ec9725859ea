use crate::error::{AtlasError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where one source image ended up inside the atlas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementRecord {
    pub filename: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub cell_x: u32,
    pub cell_y: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub original_width: u32,
    pub original_height: u32,
}

impl PlacementRecord {
    pub fn to_line(&self) -> String {
        format!(
            "{} | {}, {}, {}, {} | {}, {}, {}, {} | {}, {}",
            self.filename,
            self.x,
            self.y,
            self.width,
            self.height,
            self.cell_x,
            self.cell_y,
            self.cell_width,
            self.cell_height,
            self.original_width,
            self.original_height
        )
    }
}

/// Placements keyed by filename, kept in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Mapping {
    records: Vec<PlacementRecord>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record for a filename already present replaces the old one in its original slot.
    pub fn insert(&mut self, record: PlacementRecord) {
        match self
            .records
            .iter_mut()
            .find(|r| r.filename == record.filename)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    pub fn get(&self, filename: &str) -> Option<&PlacementRecord> {
        self.records.iter().find(|r| r.filename == filename)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacementRecord> {
        self.records.iter()
    }
}

pub fn write_mapping_to<W: Write>(
    out: &mut W,
    mapping: &Mapping,
    atlas_width: u32,
    atlas_height: u32,
) -> std::io::Result<()> {
    writeln!(out, "# Image Atlas Mapping")?;
    writeln!(out, "# Atlas Size: {}x{}", atlas_width, atlas_height)?;
    writeln!(
        out,
        "# Format: filename | x, y, width, height | cell_x, cell_y, cell_width, cell_height | original_width, original_height"
    )?;
    writeln!(out)?;

    for record in mapping.iter() {
        writeln!(out, "{}", record.to_line())?;
    }
    Ok(())
}

/// Writes the mapping file, replacing whatever is at `path`.
pub fn write_mapping(
    path: &Path,
    mapping: &Mapping,
    atlas_width: u32,
    atlas_height: u32,
) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| AtlasError::io(path, e))?;
    let mut out = std::io::BufWriter::new(file);
    write_mapping_to(&mut out, mapping, atlas_width, atlas_height)
        .and_then(|_| out.flush())
        .map_err(|e| AtlasError::io(path, e))
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextureRegion {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// RON side-car describing the atlas for engines that prefer structured data.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AtlasDescription {
    pub file: PathBuf,
    pub size: (u32, u32),
    pub frames: Vec<TextureRegion>,
}

impl AtlasDescription {
    pub fn new(atlas_file: &Path, atlas_width: u32, atlas_height: u32, mapping: &Mapping) -> Self {
        Self {
            file: atlas_file
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| atlas_file.to_path_buf()),
            size: (atlas_width, atlas_height),
            frames: mapping
                .iter()
                .map(|r| TextureRegion {
                    name: r.filename.clone(),
                    x: r.x,
                    y: r.y,
                    width: r.width,
                    height: r.height,
                })
                .collect(),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let text = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())?;
        std::fs::write(path, text).map_err(|e| AtlasError::io(path, e))
    }
}
