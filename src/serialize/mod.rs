pub mod arcgis;
pub mod wkt_out;
