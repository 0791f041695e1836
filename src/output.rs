//! Rendering and writing page documents.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::pipeline::FinalPages;
use crate::pipeline::model::{COMPARISON_FILE, FAQ_FILE, PRODUCT_FILE};

#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("failed to serialize {0}: {1}")]
    Serialize(&'static str, serde_json::Error),

    #[error("failed to write {0}: {1}")]
    Io(PathBuf, std::io::Error),
}

/// One page document ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub filename: &'static str,
    pub body: String,
}

/// Render every page to JSON text, in canonical filename order.
///
/// Non-ASCII text is kept as-is. Each document ends with a newline.
pub fn render_pages(pages: &FinalPages, pretty: bool) -> Result<Vec<RenderedPage>, OutputError> {
    Ok(vec![
        render(FAQ_FILE, &pages.faq, pretty)?,
        render(PRODUCT_FILE, &pages.product, pretty)?,
        render(COMPARISON_FILE, &pages.comparison, pretty)?,
    ])
}

fn render<T: Serialize>(
    filename: &'static str,
    page: &T,
    pretty: bool,
) -> Result<RenderedPage, OutputError> {
    let body = if pretty {
        serde_json::to_string_pretty(page)
    } else {
        serde_json::to_string(page)
    };
    let body = body.map_err(|e| OutputError::Serialize(filename, e))?;

    Ok(RenderedPage {
        filename,
        body: body + "\n",
    })
}

/// Write rendered pages into `dir`, creating it if needed.
///
/// Returns the written paths in the same order as `pages`.
pub fn write_pages(dir: &Path, pages: &[RenderedPage]) -> Result<Vec<PathBuf>, OutputError> {
    std::fs::create_dir_all(dir).map_err(|e| OutputError::Io(dir.to_path_buf(), e))?;

    pages
        .iter()
        .map(|page| {
            let path = dir.join(page.filename);
            std::fs::write(&path, &page.body).map_err(|e| OutputError::Io(path.clone(), e))?;
            Ok(path)
        })
        .collect()
}
