//! TTF font family resolution.
//!
//! The typesetting engine embeds a TrueType family into the output, so a
//! real font must be found on disk. Resolution order: an explicit directory
//! from the options, a local `fonts/` directory, then well-known system
//! locations.

use std::fs;
use std::path::Path;

use genpdf::fonts::{self, FontData, FontFamily};

use crate::error::{Error, Result};

/// Directories searched for a usable family, in order.
const SEARCH_DIRS: &[&str] = &[
    "./fonts",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
];

/// Family base names tried in each directory.
const FAMILIES: &[&str] = &["LiberationSans", "DejaVuSans"];

/// Load a TTF font family for rendering.
///
/// `font_dir` and `family` narrow the search when given; otherwise the
/// well-known locations are tried in order.
pub fn load_font_family(
    font_dir: Option<&Path>,
    family: Option<&str>,
) -> Result<FontFamily<FontData>> {
    let dirs: Vec<&Path> = match font_dir {
        Some(dir) => vec![dir],
        None => SEARCH_DIRS.iter().map(Path::new).collect(),
    };
    let families: Vec<&str> = match family {
        Some(name) => vec![name],
        None => FAMILIES.to_vec(),
    };

    for dir in &dirs {
        if !dir.is_dir() {
            continue;
        }
        for name in &families {
            if let Ok(loaded) = load_from_dir(dir, name) {
                log::debug!("loaded font family {} from {}", name, dir.display());
                return Ok(loaded);
            }
        }
    }

    Err(Error::FontLoad(format!(
        "no TTF family found (searched {:?} for {:?})",
        dirs.iter().map(|d| d.display().to_string()).collect::<Vec<_>>(),
        families,
    )))
}

fn load_from_dir(dir: &Path, name: &str) -> Result<FontFamily<FontData>> {
    // Standard naming first: Name-Regular.ttf, Name-Bold.ttf, ...
    if let Ok(loaded) = fonts::from_files(dir, name, None) {
        return Ok(loaded);
    }

    // DejaVu-style naming: Name.ttf for the regular face, Oblique for italic.
    let regular = load_font_data(&dir.join(format!("{}.ttf", name)))?;
    let bold = load_font_data(&dir.join(format!("{}-Bold.ttf", name)))?;
    let italic = load_font_data(&dir.join(format!("{}-Oblique.ttf", name)))?;
    let bold_italic = load_font_data(&dir.join(format!("{}-BoldOblique.ttf", name)))?;

    Ok(FontFamily {
        regular,
        bold,
        italic,
        bold_italic,
    })
}

fn load_font_data(path: &Path) -> Result<FontData> {
    let data = fs::read(path)?;
    FontData::new(data, None).map_err(|e| Error::FontLoad(e.to_string()))
}
