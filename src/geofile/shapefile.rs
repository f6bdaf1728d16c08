use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};

/// A single boundary feature read from a shapefile: its polygon geometry plus
/// the raw attribute record.
#[derive(Debug)]
pub struct BoundaryFeature {
    pub geometry: geo::MultiPolygon,
    pub record: shapefile::dbase::Record,
}

/// Locate the `.shp` file inside an extracted dataset directory.
pub fn find_shapefile_in_dir(dataset_dir: &Path) -> anyhow::Result<PathBuf> {
    let mut shp_paths: Vec<PathBuf> = std::fs::read_dir(dataset_dir)
        .with_context(|| format!("Reading dataset directory {:?}", dataset_dir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .map(|extension| extension.eq_ignore_ascii_case("shp"))
                .unwrap_or(false)
        })
        .collect();
    shp_paths.sort();
    match shp_paths.len() {
        0 => Err(anyhow!("No .shp file found in {:?}", dataset_dir)),
        1 => Ok(shp_paths.remove(0)),
        num_files => {
            log::warn!(
                "Found {} .shp files in {:?}, using the first one",
                num_files,
                dataset_dir
            );
            Ok(shp_paths.remove(0))
        }
    }
}

/// Read the boundary polygon from the shapefile in `dataset_dir`.
///
/// The dataset is assumed to hold exactly one polygon feature; the first record
/// is used and any extras only produce a warning.
pub fn read_boundary_feature(dataset_dir: &Path) -> anyhow::Result<BoundaryFeature> {
    let shp_path = find_shapefile_in_dir(dataset_dir)?;
    log::info!("Reading boundary feature from {:?}", shp_path);
    let mut reader = shapefile::Reader::from_path(&shp_path)
        .with_context(|| format!("Opening shapefile {:?}", shp_path))?;

    let mut features = reader.iter_shapes_and_records();
    let (shape, record) = features
        .next()
        .ok_or_else(|| anyhow!("Shapefile {:?} contains no features", shp_path))?
        .with_context(|| format!("Reading first feature of {:?}", shp_path))?;
    let num_extra_features = features.filter_map(|feature| feature.ok()).count();
    if num_extra_features > 0 {
        log::warn!(
            "Shapefile {:?} has {} extra features, using the first one",
            shp_path,
            num_extra_features
        );
    }

    let geometry = match geo::Geometry::try_from(shape) {
        Ok(geo::Geometry::MultiPolygon(multi_polygon)) => multi_polygon,
        Ok(geo::Geometry::Polygon(polygon)) => geo::MultiPolygon(vec![polygon]),
        Ok(other) => {
            return Err(anyhow!(
                "Expected a polygon feature in {:?}, got {:?}",
                shp_path,
                other
            ))
        }
        Err(err) => {
            return Err(anyhow!(
                "Could not convert shape from {:?} to a geometry, {}",
                shp_path,
                err
            ))
        }
    };
    Ok(BoundaryFeature { geometry, record })
}
