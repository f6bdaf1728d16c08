use anyhow::anyhow;
use geo::{Area, Simplify};
use geos::Geom;

const BUFFER_QUADRANT_SEGMENTS: i32 = 8;

/// Dilate a geometry outward by `distance` (in the units of its CRS).
///
/// The buffer runs through GEOS as the geometry is converted geo -> geos and
/// back.
pub fn buffer(geometry: &geo::Geometry, distance: f64) -> anyhow::Result<geo::Geometry> {
    let geos_geometry = geos::Geometry::try_from(geometry)
        .map_err(|err| anyhow!("Could not convert geometry to GEOS, {}", err))?;
    let buffered = geos_geometry
        .buffer(distance, BUFFER_QUADRANT_SEGMENTS)
        .map_err(|err| anyhow!("Could not buffer geometry, {}", err))?;
    geo::Geometry::try_from(&buffered)
        .map_err(|err| anyhow!("Could not convert buffered geometry from GEOS, {}", err))
}

/// Pick the largest polygon out of an areal geometry.
///
/// Buffering a state outline by tens of kilometers merges its parts into a
/// single polygon; if disjoint parts remain, the largest one is the outline.
pub fn largest_polygon(geometry: geo::Geometry) -> anyhow::Result<geo::Polygon> {
    match geometry {
        geo::Geometry::Polygon(polygon) => Ok(polygon),
        geo::Geometry::MultiPolygon(multi_polygon) => multi_polygon
            .0
            .into_iter()
            .max_by(|lhs, rhs| lhs.unsigned_area().total_cmp(&rhs.unsigned_area()))
            .ok_or_else(|| anyhow!("Buffering produced an empty multipolygon")),
        other => Err(anyhow!("Buffering produced a non-areal geometry {:?}", other)),
    }
}

/// Smooth a raw boundary into a display-ready outline: buffer outward by
/// `tolerance`, then Douglas-Peucker simplify with the same `tolerance`.
///
/// Buffering first removes small-scale noise and self-intersections that would
/// otherwise trip up the simplifier; sharing the distance ties the smoothing
/// strength to the simplification coarseness.
pub fn smooth_outline(geometry: &geo::Geometry, tolerance: f64) -> anyhow::Result<geo::Polygon> {
    let buffered = largest_polygon(buffer(geometry, tolerance)?)?;
    Ok(buffered.simplify(&tolerance))
}
