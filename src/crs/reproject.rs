use anyhow::anyhow;
use proj::Transform;

pub type EpsgCode = u32;

/// EPSG:3857, Web Mercator. Projected, meter-based.
pub const WEB_MERCATOR_EPSG: EpsgCode = 3857;
/// EPSG:4326, WGS84 longitude/latitude in degrees.
pub const WGS84_EPSG: EpsgCode = 4326;

pub fn epsg_code_to_authority_string(code: EpsgCode) -> String {
    format!("EPSG:{}", code)
}

/// Reproject a polygon from `from_crs` to `to_crs` (authority strings such as
/// "EPSG:3857").
///
/// `Proj::new_known_crs` normalizes axis order for visualization, so
/// coordinates are always (x=longitude/easting, y=latitude/northing) on both
/// sides regardless of the authority definition.
pub fn project_polygon(
    polygon: &geo::Polygon,
    from_crs: &str,
    to_crs: &str,
) -> anyhow::Result<geo::Polygon> {
    let projection = proj::Proj::new_known_crs(from_crs, to_crs, None)?;
    polygon
        .transformed(&projection)
        .map_err(|err| anyhow!("Could not project polygon, {}", err))
}
