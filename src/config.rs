use std::path::{Path, PathBuf};

/// Suffix appended to the atlas name.
pub const ATLAS_SUFFIX: &str = "-atlus";
pub const MAPPING_SUFFIX: &str = "_mapping.txt";

pub const DEFAULT_SPRITE_SIZE: u32 = 32;
pub const DEFAULT_ATLAS_SIZE: u32 = 512;

/// Settings for a single atlas run. Every image gets a cell of
/// `sprite_width x sprite_height`, whatever grid the planner picks.
#[derive(Clone, Debug)]
pub struct AtlasConfig {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub output_name: String,
    pub sprite_width: u32,
    pub sprite_height: u32,
    pub atlas_width: u32,
    pub atlas_height: u32,
    pub mapping_path: Option<PathBuf>,
    pub write_description: bool,
}

impl AtlasConfig {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        output_name: impl Into<String>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            output_name: output_name.into(),
            sprite_width: DEFAULT_SPRITE_SIZE,
            sprite_height: DEFAULT_SPRITE_SIZE,
            atlas_width: DEFAULT_ATLAS_SIZE,
            atlas_height: DEFAULT_ATLAS_SIZE,
            mapping_path: None,
            write_description: false,
        }
    }

    pub fn with_sprite_size(mut self, width: u32, height: u32) -> Self {
        self.sprite_width = width;
        self.sprite_height = height;
        self
    }

    pub fn with_atlas_size(mut self, width: u32, height: u32) -> Self {
        self.atlas_width = width;
        self.atlas_height = height;
        self
    }

    pub fn with_mapping_path(mut self, path: Option<PathBuf>) -> Self {
        self.mapping_path = path;
        self
    }

    pub fn with_description(mut self, enabled: bool) -> Self {
        self.write_description = enabled;
        self
    }

    /// `{output_path}/{output_name}-atlus.png`
    pub fn atlas_file_path(&self) -> PathBuf {
        self.output_path
            .join(format!("{}{}.png", self.output_name, ATLAS_SUFFIX))
    }

    /// The `--mapping` override, or `output_path` with its extension swapped for
    /// `_mapping.txt` (`out` gives `out_mapping.txt`, `out/` gives `out/_mapping.txt`).
    pub fn mapping_file_path(&self) -> PathBuf {
        match &self.mapping_path {
            Some(path) => path.clone(),
            None => with_suffix(&self.output_path, MAPPING_SUFFIX),
        }
    }

    pub fn ron_file_path(&self) -> PathBuf {
        let mut path = self.atlas_file_path();
        path.set_extension("ron");
        path
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let ends_with_separator = path
        .as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator);

    let mut base = if ends_with_separator {
        path.as_os_str().to_owned()
    } else {
        path.with_extension("").into_os_string()
    };
    base.push(suffix);
    PathBuf::from(base)
}
