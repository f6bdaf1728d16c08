extern crate log;
pub mod crs;
pub mod fetch;
pub mod geofile;
pub mod outline;
pub mod serialize;
use crate::crs::reproject::{epsg_code_to_authority_string, project_polygon, WGS84_EPSG};
use crate::fetch::download::sync_boundary_data;
use crate::geofile::shapefile::read_boundary_feature;
use crate::outline::smooth::smooth_outline;
use crate::serialize::arcgis::ArcGisPolygon;
use crate::serialize::wkt_out::{polygon_to_rounded_wkt, round_coordinates};
use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::{fs::read_to_string, path::Path};

/// Fetch the official California state boundary and print a smoothed,
/// simplified outline as WKT and as an ArcGIS JSON ring structure.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to an optional YAML config file overriding the built-in defaults.
    #[arg(short, long)]
    config_filepath: Option<String>,

    /// Directory the boundary dataset is cached under.
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug)]
#[serde(default)]
struct Config {
    /// Download URL for the zipped shapefile. Defaults to the data.ca.gov
    /// resource for `basename`.
    dataset_url: Option<String>,
    basename: String,
    smooth_tolerance_meters: f64,
    /// CRS the source shapefile coordinates are assumed to be in. The
    /// tolerance above only means meters if this is a meter-based CRS.
    source_crs: String,
    data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_url: None,
            basename: "ca_state".to_string(),
            smooth_tolerance_meters: 60_000.0,
            source_crs: "EPSG:3857".to_string(),
            data_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    fn resolve_dataset_url(&self) -> String {
        match &self.dataset_url {
            Some(url) => url.clone(),
            None => format!(
                "https://data.ca.gov/dataset/e212e397-1277-4df3-8c22-40721b095f33/resource/3db1e426-fb51-44f5-82d5-a54d7c6e188b/download/{}.zip",
                self.basename
            ),
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }

    let args = Args::try_parse()?;
    let mut config = match &args.config_filepath {
        Some(config_filepath) => {
            if !Path::new(config_filepath).exists() {
                return Err(anyhow!("Config file {} not found", config_filepath));
            }
            let config_contents = read_to_string(config_filepath)?;
            serde_yaml::from_str(&config_contents)?
        }
        None => Config::default(),
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    log::info!(
        "Assuming source dataset CRS {}, the {} m tolerance only holds for meter-based coordinates",
        config.source_crs,
        config.smooth_tolerance_meters
    );

    let dataset_dir = sync_boundary_data(
        &config.resolve_dataset_url(),
        &config.data_dir,
        &config.basename,
    )?;

    let boundary = read_boundary_feature(&dataset_dir)?;
    println!("{:?}", boundary);

    log::info!(
        "Smoothing outline with a {} m buffer and simplification tolerance",
        config.smooth_tolerance_meters
    );
    let smoothed = smooth_outline(
        &geo::Geometry::MultiPolygon(boundary.geometry),
        config.smooth_tolerance_meters,
    )?;

    let latlon_outline = project_polygon(
        &smoothed,
        &config.source_crs,
        &epsg_code_to_authority_string(WGS84_EPSG),
    )?;

    println!("{}", polygon_to_rounded_wkt(&latlon_outline));

    let arcgis_outline =
        ArcGisPolygon::from_exterior_ring(&round_coordinates(&latlon_outline, 1), WGS84_EPSG);
    println!("{}", serde_json::to_string(&arcgis_outline)?);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::Config;

    #[rstest]
    fn test_default_dataset_url_embeds_basename() {
        let config = Config::default();
        assert!(config
            .resolve_dataset_url()
            .ends_with("/download/ca_state.zip"));
    }

    #[rstest]
    fn test_config_overrides_from_partial_yaml() {
        let config: Config =
            serde_yaml::from_str("smooth_tolerance_meters: 1000.0\nbasename: nv_state\n").unwrap();
        assert_eq!(config.basename, "nv_state");
        assert_eq!(config.smooth_tolerance_meters, 1000.0);
        // Untouched fields keep their defaults.
        assert_eq!(config.source_crs, "EPSG:3857");
        assert!(config
            .resolve_dataset_url()
            .ends_with("/download/nv_state.zip"));
    }
}
