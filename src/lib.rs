//! Packs a directory of images into a single grid-aligned atlas and writes a
//! text mapping of where every source image landed.

pub mod atlas;
pub mod compositor;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod grid;
pub mod mapping;

pub use atlas::{generate, AtlasOutput};
pub use config::AtlasConfig;
pub use error::AtlasError;
pub use grid::{plan_grid, GridPlan};
pub use mapping::{Mapping, PlacementRecord};
