use serde::{Deserialize, Serialize};

use crate::crs::reproject::EpsgCode;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: EpsgCode,
}

/// Esri/ArcGIS JSON polygon: a list of rings plus an explicit spatial
/// reference. Only the exterior ring is carried; interior rings are dropped.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcGisPolygon {
    pub rings: Vec<Vec<[f64; 2]>>,
    #[serde(rename = "spatialReference")]
    pub spatial_reference: SpatialReference,
}

impl ArcGisPolygon {
    /// Build from a polygon's exterior ring, closure point included.
    pub fn from_exterior_ring(polygon: &geo::Polygon, wkid: EpsgCode) -> Self {
        let ring = polygon
            .exterior()
            .coords()
            .map(|coord| [coord.x, coord.y])
            .collect();
        Self {
            rings: vec![ring],
            spatial_reference: SpatialReference { wkid },
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::polygon;
    use rstest::rstest;
    use wkt::TryFromWkt;

    use crate::crs::reproject::WGS84_EPSG;
    use crate::serialize::arcgis::ArcGisPolygon;
    use crate::serialize::wkt_out::{polygon_to_rounded_wkt, round_coordinates};

    fn outline() -> geo::Polygon {
        polygon![
            (x: -124.409_591, y: 32.534_156),
            (x: -114.131_211, y: 32.534_156),
            (x: -114.131_211, y: 42.009_518),
            (x: -124.409_591, y: 42.009_518),
        ]
    }

    #[rstest]
    fn test_json_shape_and_spatial_reference() {
        let arcgis = ArcGisPolygon::from_exterior_ring(&round_coordinates(&outline(), 1), WGS84_EPSG);

        let value = serde_json::to_value(&arcgis).unwrap();

        assert!(value.get("rings").is_some());
        assert_eq!(value["rings"].as_array().unwrap().len(), 1);
        assert_eq!(value["spatialReference"]["wkid"], 4326);
    }

    #[rstest]
    fn test_exterior_ring_is_closed() {
        let arcgis = ArcGisPolygon::from_exterior_ring(&outline(), WGS84_EPSG);

        let ring = &arcgis.rings[0];
        assert_eq!(ring.first(), ring.last());
        // Four corners plus the closure point.
        assert_eq!(ring.len(), 5);
    }

    #[rstest]
    fn test_ring_matches_wkt_parsed_exterior() {
        let rounded = round_coordinates(&outline(), 1);
        let wkt_string = polygon_to_rounded_wkt(&outline());

        let parsed = match geo::Geometry::<f64>::try_from_wkt_str(&wkt_string).unwrap() {
            geo::Geometry::Polygon(polygon) => polygon,
            other => panic!("Expected a polygon, parsed {:?}", other),
        };
        let arcgis = ArcGisPolygon::from_exterior_ring(&rounded, WGS84_EPSG);

        let ring = &arcgis.rings[0];
        assert_eq!(ring.len(), parsed.exterior().0.len());
        for (pair, parsed_coord) in ring.iter().zip(parsed.exterior().coords()) {
            approx::assert_abs_diff_eq!(pair[0], parsed_coord.x, epsilon = 1e-9);
            approx::assert_abs_diff_eq!(pair[1], parsed_coord.y, epsilon = 1e-9);
        }
    }

    #[rstest]
    fn test_json_round_trip() {
        let arcgis = ArcGisPolygon::from_exterior_ring(&round_coordinates(&outline(), 1), WGS84_EPSG);

        let encoded = serde_json::to_string(&arcgis).unwrap();
        let decoded: ArcGisPolygon = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, arcgis);
    }
}
