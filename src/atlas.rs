use crate::compositor::Compositor;
use crate::config::AtlasConfig;
use crate::enumerate::enumerate_images;
use crate::error::{AtlasError, Result};
use crate::grid::plan_grid;
use crate::mapping::{write_mapping, AtlasDescription, Mapping};
use std::path::PathBuf;

/// What a finished run produced.
#[derive(Debug)]
pub struct AtlasOutput {
    pub atlas_path: PathBuf,
    pub mapping_path: PathBuf,
    pub description_path: Option<PathBuf>,
    pub mapping: Mapping,
}

/// Runs the whole pipeline: enumerate, plan, composite, then write the atlas
/// and its mapping. Nothing is written until every image has been processed.
pub fn generate(config: &AtlasConfig) -> Result<AtlasOutput> {
    let files = enumerate_images(&config.input_dir)?;
    if files.is_empty() {
        return Err(AtlasError::NoImagesFound(config.input_dir.clone()));
    }
    log::info!("Found {} images to process", files.len());

    let plan = plan_grid(
        files.len() as u32,
        config.sprite_width,
        config.sprite_height,
        config.atlas_width,
        config.atlas_height,
    );
    log::info!("Using {}x{} grid layout", plan.columns, plan.rows);
    log::info!(
        "Each cell will be {}x{} pixels",
        config.sprite_width,
        config.sprite_height
    );

    let mut compositor = Compositor::new(
        plan,
        config.sprite_width,
        config.sprite_height,
        config.atlas_width,
        config.atlas_height,
    );
    compositor.compose(&files);
    let (canvas, mapping) = compositor.finish();

    std::fs::create_dir_all(&config.output_path)
        .map_err(|e| AtlasError::io(&config.output_path, e))?;

    let atlas_path = config.atlas_file_path();
    canvas
        .save_with_format(&atlas_path, image::ImageFormat::Png)
        .map_err(|source| AtlasError::Encode {
            path: atlas_path.clone(),
            source,
        })?;
    log::info!("Atlas saved to: {}", atlas_path.display());

    let mapping_path = config.mapping_file_path();
    write_mapping(
        &mapping_path,
        &mapping,
        config.atlas_width,
        config.atlas_height,
    )?;
    log::info!("Mapping file saved to: {}", mapping_path.display());

    let description_path = if config.write_description {
        let path = config.ron_file_path();
        AtlasDescription::new(&atlas_path, config.atlas_width, config.atlas_height, &mapping)
            .write(&path)?;
        log::info!("Atlas description saved to: {}", path.display());
        Some(path)
    } else {
        None
    };

    Ok(AtlasOutput {
        atlas_path,
        mapping_path,
        description_path,
        mapping,
    })
}
