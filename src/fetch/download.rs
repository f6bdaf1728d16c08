use anyhow::anyhow;
use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

/// Download the zip archive at `url` into memory.
///
/// Any status other than 200 is a hard failure carrying the URL and the status
/// code; there is no retry.
pub fn download_boundary_archive(url: &str) -> anyhow::Result<Vec<u8>> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("ca2wkt")
        .build()?;
    let response = client.get(url).send()?;
    if response.status() != reqwest::StatusCode::OK {
        return Err(anyhow!(
            "Failed to download {}. Status code: {}",
            url,
            response.status().as_u16()
        ));
    }
    Ok(response.bytes()?.to_vec())
}

/// Extract an in-memory zip archive into `output_dir`, returning the archived
/// file names.
pub fn extract_zip_archive(archive_bytes: &[u8], output_dir: &Path) -> anyhow::Result<Vec<String>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes))?;
    let file_names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    archive.extract(output_dir)?;
    Ok(file_names)
}

/// Ensure the boundary dataset exists under `<data_dir>/<basename>`.
///
/// The mere existence of the directory counts as done; its contents are not
/// verified. On a cache miss the archive is fetched and extracted, so a failed
/// download leaves no directory behind.
pub fn sync_boundary_data(url: &str, data_dir: &Path, basename: &str) -> anyhow::Result<PathBuf> {
    let dataset_dir = data_dir.join(basename);
    if dataset_dir.exists() {
        log::info!(
            "Local dataset directory exists: {:?}",
            dataset_dir.canonicalize()
        );
        return Ok(dataset_dir);
    }

    log::info!("Downloading boundary dataset from {}", url);
    let archive_bytes = download_boundary_archive(url)?;
    let file_names = extract_zip_archive(&archive_bytes, &dataset_dir)?;
    log::info!("Extracted files: {:?}", file_names);
    Ok(dataset_dir)
}
