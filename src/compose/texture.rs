//! Cropping and merging of raster tiles
//!
//! A tile is assembled from four quadrants, each cut from the source image
//! its corner's slice calls for. Images are addressed with `y` growing
//! downwards, so `Top` regions start at row 0.

use image::{RgbaImage, imageops};
use log::debug;

use crate::codec::configuration::TextureIndex;
use crate::codec::decoder::decode_corners;
use crate::codec::slice::CornerSlices;
use crate::compose::source::{SourceImages, SourceKind};
use crate::io::configuration::QUADRANT_FRACTION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::{Aggregate, Axis, Compass, Corner, Direction, Side};

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Part of a `width` by `height` image lying in `direction`
///
/// `fraction` of each dimension is kept along every axis the direction
/// points in. `Top` is the upper band over the full width, `TopRight` the
/// upper right block, `Center` a centred block, and the `Horizontal` and
/// `Vertical` aggregates are centred bands spanning the whole image along
/// their axis.
///
/// # Errors
///
/// Returns an error if `fraction` is not in `(0, 1]` or the direction is
/// the `Orthogonal` or `Diagonal` aggregate
pub fn crop_region(
    width: u32,
    height: u32,
    direction: Direction,
    fraction: f32,
) -> Result<Region> {
    if fraction.is_nan() || fraction <= 0.0 || fraction > 1.0 {
        return Err(invalid_parameter("fraction", &fraction, &"must be in (0, 1]"));
    }
    let part_width = (width as f32 * fraction) as u32;
    let part_height = (height as f32 * fraction) as u32;

    let (x, region_width) = match direction {
        Direction::Aggregate(Aggregate::Center | Aggregate::Vertical) => {
            ((width - part_width) / 2, part_width)
        }
        Direction::Aggregate(Aggregate::Horizontal) => (0, width),
        _ => match direction.project(Axis::Horizontal)? {
            Direction::Compass(Compass::Left) => (0, part_width),
            Direction::Compass(Compass::Right) => (width - part_width, part_width),
            _ => (0, width),
        },
    };

    let (y, region_height) = match direction {
        Direction::Aggregate(Aggregate::Center | Aggregate::Horizontal) => {
            ((height - part_height) / 2, part_height)
        }
        Direction::Aggregate(Aggregate::Vertical) => (0, height),
        _ => match direction.project(Axis::Vertical)? {
            Direction::Compass(Compass::Top) => (0, part_height),
            Direction::Compass(Compass::Bottom) => (height - part_height, part_height),
            _ => (0, height),
        },
    };

    Ok(Region {
        x,
        y,
        width: region_width,
        height: region_height,
    })
}

/// Copy a region out of an image
pub fn crop(image: &RgbaImage, region: Region) -> RgbaImage {
    imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image()
}

/// Copy the quadrant of an image owned by `corner`
///
/// # Errors
///
/// Propagates region computation failures
pub fn crop_quadrant(image: &RgbaImage, corner: Corner) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let region = crop_region(width, height, corner.compass().into(), QUADRANT_FRACTION)?;
    Ok(crop(image, region))
}

/// Join `adjoin` onto the `toward` side of `base`
///
/// The result spans both images along the join axis and the larger of the
/// two across it. The smaller image is placed according to `alignment`
/// projected onto the cross axis (`Top`/`Left` flush to the start,
/// `Bottom`/`Right` flush to the end, anything else centred) and the
/// uncovered margin stays transparent.
///
/// # Errors
///
/// Returns an error if `alignment` cannot be projected onto the cross axis
pub fn merge(
    base: &RgbaImage,
    adjoin: &RgbaImage,
    toward: Side,
    alignment: Direction,
) -> Result<RgbaImage> {
    let (base_width, base_height) = base.dimensions();
    let (adjoin_width, adjoin_height) = adjoin.dimensions();

    let horizontal_join = matches!(toward, Side::Left | Side::Right);
    let cross_axis = if horizontal_join {
        Axis::Vertical
    } else {
        Axis::Horizontal
    };
    let placement = alignment.project(cross_axis)?;
    let align = |span: u32, length: u32| -> i64 {
        let slack = i64::from(span - length);
        match placement {
            Direction::Compass(Compass::Top | Compass::Left) => 0,
            Direction::Compass(Compass::Bottom | Compass::Right) => slack,
            _ => slack / 2,
        }
    };

    let (mut canvas, base_at, adjoin_at) = if horizontal_join {
        let height = base_height.max(adjoin_height);
        let (base_x, adjoin_x) = match toward {
            Side::Left => (adjoin_width, 0),
            _ => (0, base_width),
        };
        (
            RgbaImage::new(base_width + adjoin_width, height),
            (i64::from(base_x), align(height, base_height)),
            (i64::from(adjoin_x), align(height, adjoin_height)),
        )
    } else {
        let width = base_width.max(adjoin_width);
        let (base_y, adjoin_y) = match toward {
            Side::Top => (adjoin_height, 0),
            _ => (0, base_height),
        };
        (
            RgbaImage::new(width, base_height + adjoin_height),
            (align(width, base_width), i64::from(base_y)),
            (align(width, adjoin_width), i64::from(adjoin_y)),
        )
    };

    imageops::replace(&mut canvas, base, base_at.0, base_at.1);
    imageops::replace(&mut canvas, adjoin, adjoin_at.0, adjoin_at.1);
    Ok(canvas)
}

/// Assemble four quadrants into one tile
///
/// # Errors
///
/// Propagates merge failures
pub fn merge_quadrants(
    top_right: &RgbaImage,
    bottom_right: &RgbaImage,
    bottom_left: &RgbaImage,
    top_left: &RgbaImage,
) -> Result<RgbaImage> {
    let top = merge(top_left, top_right, Side::Right, Compass::Bottom.into())?;
    let bottom = merge(bottom_left, bottom_right, Side::Right, Compass::Top.into())?;
    merge(&top, &bottom, Side::Bottom, Direction::CENTER)
}

/// Compose a tile from its four corner slices
///
/// # Errors
///
/// Propagates cropping and merge failures
pub fn compose_tile(slices: &CornerSlices, sources: &SourceImages) -> Result<RgbaImage> {
    let quadrant = |corner: Corner| {
        let kind = SourceKind::for_slice(slices.get(corner), corner);
        crop_quadrant(sources.get(kind), corner)
    };
    merge_quadrants(
        &quadrant(Corner::TopRight)?,
        &quadrant(Corner::BottomRight)?,
        &quadrant(Corner::BottomLeft)?,
        &quadrant(Corner::TopLeft)?,
    )
}

/// Compose the tile for one texture index
///
/// # Errors
///
/// Propagates composition failures
pub fn compose_index(index: TextureIndex, sources: &SourceImages) -> Result<RgbaImage> {
    let slices = decode_corners(index);
    debug!(
        "composing tile {index}: TR {}, BR {}, BL {}, TL {}",
        slices.top_right, slices.bottom_right, slices.bottom_left, slices.top_left
    );
    compose_tile(&slices, sources)
}

/// Compose all 47 tiles in index order
///
/// # Errors
///
/// Propagates composition failures
pub fn generate_tileset(sources: &SourceImages) -> Result<Vec<RgbaImage>> {
    TextureIndex::all()
        .map(|index| compose_index(index, sources))
        .collect()
}
