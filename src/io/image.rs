//! PNG loading of source artwork and masks, and export of generated tiles

use image::RgbaImage;
use ndarray::Array2;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::codec::configuration::TextureIndex;
use crate::compose::source::SourceImages;
use crate::io::configuration::{MAX_GRID_DIMENSION, TILE_EXTENSION, TILE_NAME_SEPARATOR};
use crate::io::error::{Result, TileError, WithPath, invalid_parameter};
use crate::spatial::grid::{TileClass, TileGrid};

/// Paths of the five source images of a tileset
#[derive(Debug, Clone)]
pub struct SourcePaths {
    /// Tile with no neighbours
    pub isolated: PathBuf,
    /// Tile with all neighbours
    pub surrounded: PathBuf,
    /// Left to right strip
    pub horizontal_edge: PathBuf,
    /// Top to bottom strip
    pub vertical_edge: PathBuf,
    /// Junction with empty diagonals
    pub crossing: PathBuf,
}

/// Load an image as 8-bit RGBA
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).with_path(path)?;
    Ok(img.to_rgba8())
}

/// Load and validate the five source images
///
/// # Errors
///
/// Returns an error if any image fails to load or the sizes differ
pub fn load_sources(paths: &SourcePaths) -> Result<SourceImages> {
    SourceImages::new(
        load_rgba(&paths.isolated)?,
        load_rgba(&paths.surrounded)?,
        load_rgba(&paths.horizontal_edge)?,
        load_rgba(&paths.vertical_edge)?,
        load_rgba(&paths.crossing)?,
    )
}

/// Build a tile grid from a mask image
///
/// Each pixel is one cell. Pixels with alpha at or above `alpha_threshold`
/// are painted; every distinct colour among them becomes its own tile
/// class, numbered in row-major order of first appearance.
///
/// # Errors
///
/// Returns an error if the mask cannot be loaded or is too large
pub fn load_mask(path: &Path, alpha_threshold: u8) -> Result<TileGrid> {
    let rgba = load_rgba(path)?;
    mask_to_grid(&rgba, alpha_threshold)
}

/// Convert an in-memory mask to a tile grid, see [`load_mask`]
///
/// # Errors
///
/// Returns an error if the mask exceeds `MAX_GRID_DIMENSION`
pub fn mask_to_grid(rgba: &RgbaImage, alpha_threshold: u8) -> Result<TileGrid> {
    let (width, height) = rgba.dimensions();
    let (rows, cols) = (height as usize, width as usize);
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "mask",
            &format!("{width}x{height}"),
            &format!("must not exceed {MAX_GRID_DIMENSION} pixels per side"),
        ));
    }

    let mut classes: HashMap<[u8; 4], TileClass> = HashMap::new();
    let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
        let pixel = rgba.get_pixel_checked(col as u32, row as u32)?;
        let [.., alpha] = pixel.0;
        (alpha >= alpha_threshold).then(|| {
            let next = TileClass(classes.len() as u32);
            *classes.entry(pixel.0).or_insert(next)
        })
    });

    TileGrid::from_cells(cells)
}

/// Output path of one tile: `<dir>/<name>_<index>.png`
pub fn tile_path(directory: &Path, name: &str, index: TextureIndex) -> PathBuf {
    directory.join(format!(
        "{name}{TILE_NAME_SEPARATOR}{index}.{TILE_EXTENSION}"
    ))
}

/// Save one tile, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the image saved
pub fn save_tile(tile: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TileError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    tile.save(path).map_err(|e| TileError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a whole tileset in index order, returning the written paths
///
/// # Errors
///
/// Returns an error if more tiles than texture indices are given, or any
/// tile fails to save
pub fn save_tileset(tiles: &[RgbaImage], directory: &Path, name: &str) -> Result<Vec<PathBuf>> {
    let mut indices = TextureIndex::all();
    tiles
        .iter()
        .map(|tile| -> Result<PathBuf> {
            let index = indices.next().ok_or_else(|| {
                invalid_parameter("tiles", &tiles.len(), &"more tiles than texture indices")
            })?;
            let path = tile_path(directory, name, index);
            save_tile(tile, &path)?;
            Ok(path)
        })
        .collect()
}
