//! Shared fixtures: static directories with real FITS headers, payload
//! directories, and catalog records.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use frames_core::{CatalogRecord, FramesSettings, InMemoryCatalog};
use frames_resolver::static_calib::fits_header::{BLOCK_SIZE, CARD_SIZE};
use frames_resolver::FrameResolver;

pub const MODE: &str = "WFM-NOAO-N";

pub fn night(s: &str) -> NaiveDate {
    frames_core::types::parse_night(s).unwrap()
}

/// Primary FITS header holding `cards` as `(keyword, value)` string cards.
pub fn encode_header(cards: &[(&str, &str)]) -> Vec<u8> {
    let mut lines = vec![
        format!("{:<8}= {:>20}", "SIMPLE", "T"),
        format!("{:<8}= {:>20}", "BITPIX", "8"),
        format!("{:<8}= {:>20}", "NAXIS", "0"),
    ];
    for (key, value) in cards {
        let quoted = format!("'{}'", value.replace('\'', "''"));
        if key.len() > 8 {
            lines.push(format!("HIERARCH {key} = {quoted}"));
        } else {
            lines.push(format!("{key:<8}= {quoted}"));
        }
    }
    lines.push("END".to_string());

    let mut bytes: Vec<u8> = Vec::new();
    for line in lines {
        let mut card = format!("{line:<CARD_SIZE$}");
        card.truncate(CARD_SIZE);
        bytes.extend_from_slice(card.as_bytes());
    }
    let padded = bytes.len().div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
    bytes.resize(padded, b' ');
    bytes
}

/// Static directory holding one classified file per `(file name, category)`.
pub fn static_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, category) in files {
        fs::write(dir.path().join(name), encode_header(&[("ESO PRO CATG", category)])).unwrap();
    }
    dir
}

/// `<root>/<name>` holding `count` payload files for `category`.
pub fn payload_dir(root: &Path, name: &str, category: &str, count: usize) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    if count == 1 {
        fs::write(dir.join(format!("{category}.fits")), b"").unwrap();
    } else {
        for i in 1..=count {
            fs::write(dir.join(format!("{category}-{i:02}.fits")), b"").unwrap();
        }
    }
    dir
}

pub fn record(name: &str, category: &str, night_str: &str, path: &Path) -> CatalogRecord {
    CatalogRecord {
        name: name.to_string(),
        category: category.to_string(),
        instrument_mode: Some(MODE.to_string()),
        night: night(night_str),
        path: path.to_path_buf(),
        object: None,
    }
}

/// Catalog record with its payload directory created under `root`.
pub fn stored_record(root: &Path, name: &str, category: &str, night_str: &str, files: usize) -> CatalogRecord {
    let path = payload_dir(root, name, category, files);
    record(name, category, night_str, &path)
}

pub fn settings(static_path: &Path) -> FramesSettings {
    FramesSettings {
        muse_calib_path: static_path.to_path_buf(),
        ..FramesSettings::default()
    }
}

pub fn resolver(settings: &FramesSettings, records: Vec<CatalogRecord>) -> FrameResolver {
    FrameResolver::new(settings, Arc::new(InMemoryCatalog::with_records(records))).unwrap()
}

pub fn file_names(paths: &[&Path]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}
