use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::{
    assets::reflect::{placeholder_cover, prepare_cover},
    foundation::error::{CoverflowError, CoverflowResult},
    layout::cover::Cover,
};

/// Decode encoded image bytes into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> CoverflowResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

/// Load and preprocess one cover. Undecodable files become a placeholder so
/// cover indices keep matching the file listing.
pub fn load_cover(path: &Path, cell_width: u32, cell_height: u32) -> CoverflowResult<Cover> {
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let decoded = std::fs::read(path)
        .with_context(|| format!("read cover '{}'", path.display()))
        .map_err(CoverflowError::from)
        .and_then(|bytes| decode_image(&bytes));

    let visual = match decoded {
        Ok(img) => prepare_cover(&img, cell_width, cell_height)?,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "using placeholder cover");
            placeholder_cover(cell_width, cell_height)?
        }
    };
    Ok(Cover::new(label, visual))
}

/// Load every regular file in `dir` (sorted by name) as a cover.
///
/// Decoding and preprocessing run on the rayon pool; the result keeps listing order.
#[tracing::instrument]
pub fn load_cover_dir(
    dir: &Path,
    cell_width: u32,
    cell_height: u32,
) -> CoverflowResult<Vec<Cover>> {
    let list_error = |e: std::io::Error| {
        CoverflowError::asset(format!("list covers in '{}': {e}", dir.display()))
    };
    let entries = std::fs::read_dir(dir).map_err(list_error)?;

    let mut paths = Vec::<PathBuf>::new();
    for entry in entries {
        let entry = entry.map_err(list_error)?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let covers = paths
        .par_iter()
        .map(|p| load_cover(p, cell_width, cell_height))
        .collect::<CoverflowResult<Vec<_>>>()?;

    tracing::debug!(count = covers.len(), "loaded covers");
    Ok(covers)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
