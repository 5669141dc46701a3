//! Zip extraction

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use crate::errors::FetchError;

/// Extract every entry of a zip archive into `dest`.
///
/// Entries whose names would escape `dest` are skipped. Unix permissions
/// stored in the archive are restored so the binary stays executable.
pub fn extract_zip(data: &[u8], dest: &Path) -> Result<(), FetchError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))
        .map_err(|e| FetchError::Archive(format!("failed to open zip: {}", e)))?;

    fs::create_dir_all(dest)?;

    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| FetchError::Archive(format!("failed to read zip entry: {}", e)))?;

        let outpath = match file.enclosed_name() {
            Some(path) => dest.join(path),
            None => continue,
        };

        if file.is_dir() {
            fs::create_dir_all(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .map_err(|e| FetchError::Archive(format!("failed to inflate {}: {}", file.name(), e)))?;
        fs::write(&outpath, &content)?;

        #[cfg(unix)]
        if let Some(mode) = file.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&outpath, fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}
