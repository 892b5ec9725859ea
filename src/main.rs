use anyhow::Context;
use clap::Parser;
use grid_atlas::config::{DEFAULT_ATLAS_SIZE, DEFAULT_SPRITE_SIZE};
use grid_atlas::AtlasConfig;

#[derive(clap::Parser, Debug)]
#[command(about = "Create a texture atlas from multiple images", version)]
struct ProgramOptions {
    /// Directory containing input images
    input_dir: std::path::PathBuf,
    /// Directory the atlas PNG is written to
    output_path: std::path::PathBuf,
    /// Name for the atlas PNG file
    output_name: String,
    /// Individual sprite width in pixels
    #[arg(long, default_value_t = DEFAULT_SPRITE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    sprite_width: u32,
    /// Individual sprite height in pixels
    #[arg(long, default_value_t = DEFAULT_SPRITE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    sprite_height: u32,
    /// Atlas width in pixels
    #[arg(long, default_value_t = DEFAULT_ATLAS_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    /// Atlas height in pixels
    #[arg(long, default_value_t = DEFAULT_ATLAS_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    /// Path to save the mapping file (default: output_path with _mapping.txt suffix)
    #[arg(long)]
    mapping: Option<std::path::PathBuf>,
    /// Also write a RON atlas description next to the atlas
    #[arg(long)]
    ron: bool,
    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<&ProgramOptions> for AtlasConfig {
    fn from(opts: &ProgramOptions) -> Self {
        AtlasConfig::new(
            opts.input_dir.clone(),
            opts.output_path.clone(),
            opts.output_name.clone(),
        )
        .with_sprite_size(opts.sprite_width, opts.sprite_height)
        .with_atlas_size(opts.width, opts.height)
        .with_mapping_path(opts.mapping.clone())
        .with_description(opts.ron)
    }
}

fn main() -> anyhow::Result<()> {
    let packer_args = ProgramOptions::parse();

    let level = match packer_args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
    log::debug!("Program args {:?}", packer_args);

    let config = AtlasConfig::from(&packer_args);
    let output = grid_atlas::generate(&config)
        .with_context(|| format!("failed to build atlas from {}", config.input_dir.display()))?;

    log::info!("Atlas generation complete!");
    log::info!("- Atlas: {}", output.atlas_path.display());
    log::info!("- Mapping: {}", output.mapping_path.display());
    log::info!("- Processed {} images", output.mapping.len());
    Ok(())
}
