//! Font Locator: map requested family names to concrete (file, face
//! index) pairs under a regular-weight constraint.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use ttf_parser::{name_id, Face};

use crate::error::Result;

/// Accepted OS/2 usWeightClass band: "regular"-ish faces only, so a
/// family name shared with bold/light variants resolves to the one
/// weight every font is compared at.
pub const WEIGHT_BAND: RangeInclusive<u16> = 350..=450;

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// A requested family name resolved to a concrete face on disk.
/// Immutable once produced; families with no acceptable face simply
/// have no entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedFont {
    pub family: String,
    pub path: PathBuf,
    pub face_index: u32,
}

/// Scan `fonts_dir` and resolve every requested family that has a
/// face inside the weight band.
///
/// Files are visited in sorted order so that the first acceptable face
/// wins deterministically when several could satisfy a name. Corrupt
/// files and faces are skipped; only a directory that cannot be
/// enumerated at all is an error.
pub fn locate_fonts(
    fonts_dir: &Path,
    requested: &BTreeSet<String>,
) -> Result<BTreeMap<String, ResolvedFont>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(fonts_dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| is_font_file(path))
        .collect();
    paths.sort();

    let mut found = BTreeMap::new();
    for path in paths {
        if found.len() == requested.len() {
            break;
        }
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(err) => {
                log::debug!("skipping unreadable font file {}: {err}", path.display());
                continue;
            }
        };
        let face_count = ttf_parser::fonts_in_collection(&data).unwrap_or(1);
        for index in 0..face_count {
            let face = match Face::parse(&data, index) {
                Ok(face) => face,
                Err(err) => {
                    // No further faces in this container.
                    log::debug!(
                        "skipping face {index} of {}: {err}",
                        path.display()
                    );
                    break;
                }
            };
            let Some(family) = family_name(&face) else {
                continue;
            };
            if !requested.contains(&family) || found.contains_key(&family) {
                continue;
            }
            if !weight_in_band(&face) {
                log::debug!(
                    "rejecting {family} face {index} of {}: weight {} outside band",
                    path.display(),
                    face.weight().to_number()
                );
                continue;
            }
            found.insert(
                family.clone(),
                ResolvedFont {
                    family,
                    path: path.clone(),
                    face_index: index,
                },
            );
        }
    }
    Ok(found)
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            FONT_EXTENSIONS.iter().any(|known| *known == ext)
        })
}

/// First decodable Unicode family-name record, as font pickers match it.
fn family_name(face: &Face) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == name_id::FAMILY && name.is_unicode())
        .find_map(|name| name.to_string())
}

/// Accept faces inside [`WEIGHT_BAND`]. A face without an OS/2 table
/// has no weight metadata and is accepted as-is (fail open).
fn weight_in_band(face: &Face) -> bool {
    match face.tables().os2 {
        Some(os2) => WEIGHT_BAND.contains(&os2.weight().to_number()),
        None => true,
    }
}
