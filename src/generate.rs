//! Static site generation.
//!
//! Renders every content route plus the not-found page to plain HTML files
//! and copies the asset tree alongside them. The result can be served by any
//! static host; only the contact form needs `portfolio serve` (or a host that
//! forwards `POST /contact`).
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home
//! ├── about/index.html
//! ├── projects/index.html
//! ├── experience/index.html
//! ├── skills/index.html
//! ├── contact/index.html
//! ├── 404.html                   # Not-found view
//! └── assets/
//!     └── images/...             # Copied from <source>/assets
//! ```
//!
//! Directory-style output keeps the public URLs extension-free, matching the
//! paths the navigation links to.

use crate::contact::ContactFlow;
use crate::nav::NavShell;
use crate::pages::Site;
use crate::route::Route;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

pub const ASSETS_DIR: &str = "assets";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A page written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub route: Route,
    /// Relative to the output directory.
    pub file: PathBuf,
    pub bytes: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub pages: Vec<GeneratedPage>,
    pub assets_copied: usize,
    pub output_dir: PathBuf,
}

pub fn generate(
    site: &Site,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let mut pages = Vec::new();
    let idle = ContactFlow::new();
    for route in Route::ALL.into_iter().chain([Route::NotFound]) {
        let shell = NavShell::new(route.path().unwrap_or("/404"));
        let html = site.render_route(route, &shell, &idle).into_string();

        let file = PathBuf::from(route.output_file());
        let target = output_dir.join(&file);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &html)?;
        pages.push(GeneratedPage {
            route,
            file,
            bytes: html.len(),
        });
    }

    let assets_copied = copy_assets(&source_dir.join(ASSETS_DIR), &output_dir.join(ASSETS_DIR))?;

    Ok(BuildReport {
        pages,
        assets_copied,
        output_dir: output_dir.to_path_buf(),
    })
}

/// Mirror `src` into `dst`, returning the number of files copied. A missing
/// `src` copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if !is_hidden(relative) {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn is_hidden(relative: &Path) -> bool {
    relative
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
