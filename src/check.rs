//! Content validation.
//!
//! The datasets are compiled in, so most invariants can only be broken by
//! editing [`crate::content`]. `portfolio check` re-verifies them and, more
//! usefully, confirms that every image the pages reference exists under the
//! site directory and decodes. A missing image only degrades to a broken
//! `<img>` on the live site; `check` is where it becomes visible.

use crate::content::{EXPERIENCES, NAV_ITEMS, PROJECTS, SKILLS};
use crate::types::{Cover, NavItem};
use image::ImageReader;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Dataset sizes plus everything found wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub nav_items: usize,
    pub projects: usize,
    pub experiences: usize,
    pub skills: usize,
    pub assets_checked: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }
}

/// Every `/assets/...` URL the pages reference, in page order.
pub fn referenced_assets() -> Vec<&'static str> {
    let covers = PROJECTS.iter().filter_map(|p| match p.cover {
        Cover::Image(path) => Some(path),
        Cover::Emoji(_) => None,
    });
    let logos = EXPERIENCES.iter().map(|e| e.logo);
    covers.chain(logos).collect()
}

/// Validate the datasets and the assets under `site_dir`.
pub fn check(site_dir: &Path) -> CheckReport {
    let mut issues = check_nav(&NAV_ITEMS);
    issues.extend(check_records());

    let assets = referenced_assets();
    for url in &assets {
        if let Some(issue) = check_asset(site_dir, url) {
            issues.push(issue);
        }
    }

    CheckReport {
        nav_items: NAV_ITEMS.len(),
        projects: PROJECTS.len(),
        experiences: EXPERIENCES.len(),
        skills: SKILLS.iter().map(|g| g.skills.len()).sum(),
        assets_checked: assets.len(),
        issues,
    }
}

fn check_nav(items: &[NavItem]) -> Vec<Issue> {
    let mut issues = Vec::new();
    if items.len() != 6 {
        issues.push(Issue::error(format!(
            "navigation has {} items, expected 6",
            items.len()
        )));
    }
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.path) {
            issues.push(Issue::error(format!(
                "navigation path '{}' appears more than once",
                item.path
            )));
        }
    }
    issues
}

fn check_records() -> Vec<Issue> {
    let mut issues = Vec::new();

    let mut ids = HashSet::new();
    for project in PROJECTS {
        if !ids.insert(project.id) {
            issues.push(Issue::error(format!("duplicate project id {}", project.id)));
        }
        if project.in_progress && (project.github_link.is_some() || project.demo_link.is_some()) {
            issues.push(Issue::warning(format!(
                "project '{}' is in progress; its links are not shown",
                project.title
            )));
        }
    }

    let mut ids = HashSet::new();
    for exp in EXPERIENCES {
        if !ids.insert(exp.id) {
            issues.push(Issue::error(format!("duplicate experience id {}", exp.id)));
        }
        if exp.key_points.is_empty() {
            issues.push(Issue::error(format!(
                "experience '{}' has no key points",
                exp.title
            )));
        }
        if exp.demo_link.is_some() && exp.github_link.is_none() {
            issues.push(Issue::warning(format!(
                "experience '{}' has a demo link but no GitHub link; the demo is not shown",
                exp.title
            )));
        }
    }

    issues
}

/// `None` when the asset exists and decodes as an image.
fn check_asset(site_dir: &Path, url: &str) -> Option<Issue> {
    let Some(relative) = url.strip_prefix('/') else {
        return Some(Issue::error(format!("asset '{url}' is not an absolute path")));
    };
    let path = site_dir.join(relative);
    if !path.is_file() {
        return Some(Issue::error(format!(
            "asset '{url}' not found at {}",
            path.display()
        )));
    }
    let decoded = ImageReader::open(&path)
        .and_then(|r| r.with_guessed_format())
        .map_err(image::ImageError::from)
        .and_then(|r| r.into_dimensions());
    match decoded {
        Ok(_) => None,
        Err(e) => Some(Issue::error(format!("asset '{url}' is not a readable image: {e}"))),
    }
}
