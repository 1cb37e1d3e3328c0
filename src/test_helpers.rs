//! Shared test utilities for rendered HTML.
//!
//! Renderer tests assert on strings rather than a parsed DOM; these helpers
//! keep those assertions readable.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_projects().into_string();
//! assert_in_order(&html, &["Statistical Website", "Bookstore"]);
//! assert_eq!(tag_texts(&html, "tech-tag")[0], "Java");
//! assert_eq!(count(&html, "project-card"), 6);
//! ```

use std::path::Path;
use tempfile::TempDir;

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Assert every needle occurs, each after the previous one.
pub fn assert_in_order(haystack: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => {
                let seen = haystack[..from].contains(needle);
                panic!(
                    "'{needle}' not found after byte {from} (present earlier: {seen}). \
                     Expected order: {needles:?}"
                )
            }
        }
    }
}

/// Text content of every `<span class="{class}">…</span>`, in document order.
pub fn tag_texts(html: &str, class: &str) -> Vec<String> {
    let open = format!(r#"<span class="{class}">"#);
    html.match_indices(&open)
        .filter_map(|(start, _)| {
            let text_start = start + open.len();
            html[text_start..]
                .find("</span>")
                .map(|end| html[text_start..text_start + end].to_string())
        })
        .collect()
}

// =========================================================================
// Site directory fixtures
// =========================================================================

/// A site directory containing every asset the datasets reference, as tiny
/// valid images.
pub fn site_with_assets() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for asset in crate::check::referenced_assets() {
        write_image(&asset_file(tmp.path(), asset));
    }
    tmp
}

/// Filesystem location of an `/assets/...` URL inside a site directory.
pub fn asset_file(site_dir: &Path, url: &str) -> std::path::PathBuf {
    site_dir.join(url.trim_start_matches('/'))
}

/// Write a 2x2 image in the format its extension names, creating parent
/// directories.
pub fn write_image(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let img = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 40, 90]));
    img.save(path).unwrap();
}
