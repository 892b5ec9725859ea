use crate::enumerate::ImageFile;
use crate::error::{AtlasError, Result};
use crate::grid::GridPlan;
use crate::mapping::{Mapping, PlacementRecord};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};

/// Size of `width x height` after a uniform scale that makes it touch the cell
/// on its tighter axis. Images smaller than the cell are enlarged.
pub fn fit_to_cell(width: u32, height: u32, cell_width: u32, cell_height: u32) -> (u32, u32) {
    let scale_x = cell_width as f64 / width as f64;
    let scale_y = cell_height as f64 / height as f64;
    let scale = scale_x.min(scale_y);

    let new_width = ((width as f64 * scale).round() as u32).clamp(1, cell_width);
    let new_height = ((height as f64 * scale).round() as u32).clamp(1, cell_height);
    (new_width, new_height)
}

/// Offset that centers `size` inside `cell`, truncating towards the cell origin.
pub fn center_offset(cell: u32, size: u32) -> u32 {
    cell.saturating_sub(size) / 2
}

/// Owns the atlas canvas while images are pasted into their grid cells.
pub struct Compositor {
    plan: GridPlan,
    cell_width: u32,
    cell_height: u32,
    canvas: RgbaImage,
    mapping: Mapping,
}

impl Compositor {
    pub fn new(
        plan: GridPlan,
        cell_width: u32,
        cell_height: u32,
        atlas_width: u32,
        atlas_height: u32,
    ) -> Self {
        Self {
            plan,
            cell_width,
            cell_height,
            canvas: RgbaImage::new(atlas_width, atlas_height),
            mapping: Mapping::new(),
        }
    }

    /// Scales, centers and blends `img` into the cell for `index`, then records it.
    pub fn place(&mut self, index: u32, filename: &str, img: &DynamicImage) -> PlacementRecord {
        let (cell_x, cell_y) = self
            .plan
            .cell_origin(index, self.cell_width, self.cell_height);
        let (original_width, original_height) = img.dimensions();

        let rgba = img.to_rgba8();
        let (width, height) = fit_to_cell(
            original_width,
            original_height,
            self.cell_width,
            self.cell_height,
        );
        let resized = imageops::resize(&rgba, width, height, FilterType::Lanczos3);

        let x = cell_x + center_offset(self.cell_width, width);
        let y = cell_y + center_offset(self.cell_height, height);

        // Pixels past the canvas edge are dropped by overlay.
        imageops::overlay(&mut self.canvas, &resized, x as i64, y as i64);

        let record = PlacementRecord {
            filename: filename.to_string(),
            x,
            y,
            width,
            height,
            cell_x,
            cell_y,
            cell_width: self.cell_width,
            cell_height: self.cell_height,
            original_width,
            original_height,
        };
        self.mapping.insert(record.clone());
        record
    }

    pub fn composite_file(&mut self, index: u32, file: &ImageFile) -> Result<PlacementRecord> {
        let img = decode(file)?;
        Ok(self.place(index, &file.file_name(), &img))
    }

    /// Places every file at its enumeration index. Files that fail to decode are
    /// logged and leave their cell empty.
    pub fn compose(&mut self, files: &[ImageFile]) {
        for (index, file) in files.iter().enumerate() {
            log::debug!("Processing: {}", file.file_name());

            if let Err(err) = self.composite_file(index as u32, file) {
                match std::error::Error::source(&err) {
                    Some(cause) => log::warn!("Skipping {}: {}", file.path.display(), cause),
                    None => log::warn!("Skipping {}: {}", file.path.display(), err),
                }
            }
        }
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn finish(self) -> (RgbaImage, Mapping) {
        (self.canvas, self.mapping)
    }
}

/// Opens and decodes one file. The codec is chosen from the file contents
/// first, so containers with a misleading extension still decode when possible.
pub fn decode(file: &ImageFile) -> Result<DynamicImage> {
    let decode_err = |source| AtlasError::Decode {
        path: file.path.clone(),
        source,
    };

    let mut reader = image::io::Reader::open(&file.path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?;
    if reader.format().is_none() {
        if let Some(format) = file.format {
            reader.set_format(format);
        }
    }
    reader.decode().map_err(decode_err)
}
