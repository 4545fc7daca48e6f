//! Path and glob expansion for overrides and catalog payloads.

use std::path::{Path, PathBuf};

use glob::Pattern;

use frames_core::constants::FITS_EXTENSIONS;
use frames_core::errors::FramesResult;

/// Matches of `pattern`, sorted.
pub fn glob_sorted(pattern: &str) -> FramesResult<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        paths.push(entry.map_err(glob::GlobError::into_error)?);
    }
    paths.sort();
    Ok(paths)
}

pub fn has_wildcard(value: &str) -> bool {
    value.contains(['*', '?'])
}

pub fn is_fits_path(value: &str) -> bool {
    FITS_EXTENSIONS.iter().any(|ext| value.ends_with(ext))
}

/// Files named by a text override of `category`:
/// a pattern is globbed as is, a FITS path is taken literally, anything
/// else is a directory searched for `category*`.
pub fn expand_override(value: &str, category: &str) -> FramesResult<Vec<PathBuf>> {
    if has_wildcard(value) {
        glob_sorted(value)
    } else if is_fits_path(value) {
        Ok(vec![PathBuf::from(value)])
    } else {
        glob_sorted(&in_dir(Path::new(value), &format!("{category}*")))
    }
}

/// Payload files of a catalog record: `<path>/<category>*.fits`, sorted.
pub fn payload_files(path: &Path, category: &str) -> FramesResult<Vec<PathBuf>> {
    glob_sorted(&in_dir(path, &format!("{}*.fits", Pattern::escape(category))))
}

fn in_dir(dir: &Path, pattern: &str) -> String {
    let dir = Pattern::escape(&dir.to_string_lossy());
    format!("{}/{pattern}", dir.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_override_values() {
        assert!(has_wildcard("/data/*.fits"));
        assert!(has_wildcard("/data/WAVE?.fits"));
        assert!(!has_wildcard("/data/wave"));
        assert!(is_fits_path("/a/b.fits.fz"));
        assert!(is_fits_path("/a/b.fits.gz"));
        assert!(!is_fits_path("/a/b.fit"));
    }

    #[test]
    fn literal_fits_override_is_not_globbed() {
        let files = expand_override("/nowhere/MASTER_BIAS.fits", "MASTER_BIAS").unwrap();
        assert_eq!(files, vec![PathBuf::from("/nowhere/MASTER_BIAS.fits")]);
    }

    #[test]
    fn directory_override_globs_category_prefix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["TRACE_TABLE-02.fits", "TRACE_TABLE-01.fits", "WAVECAL.fits"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let files = expand_override(dir.path().to_str().unwrap(), "TRACE_TABLE").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["TRACE_TABLE-01.fits", "TRACE_TABLE-02.fits"]);
    }

    #[test]
    fn payload_glob_requires_fits_suffix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["MASTER_FLAT.fits", "MASTER_FLAT.log"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        let files = payload_files(dir.path(), "MASTER_FLAT").unwrap();
        assert_eq!(files, vec![dir.path().join("MASTER_FLAT.fits")]);
    }
}
