use geo::MapCoords;
use wkt::ToWkt;

/// Round every coordinate of a polygon to `decimal_places` decimals.
pub fn round_coordinates(polygon: &geo::Polygon, decimal_places: u32) -> geo::Polygon {
    let factor = 10f64.powi(decimal_places as i32);
    polygon.map_coords(|coord| geo::Coord {
        x: (coord.x * factor).round() / factor,
        y: (coord.y * factor).round() / factor,
    })
}

/// Serialize a polygon to WKT with coordinates rounded to one decimal place.
///
/// One decimal of a degree is about 11 km at the equator, intentionally coarse
/// to match the smoothing tolerance of the pipeline.
pub fn polygon_to_rounded_wkt(polygon: &geo::Polygon) -> String {
    round_coordinates(polygon, 1).wkt_string()
}
