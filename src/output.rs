//! CLI output formatting.
//!
//! Output is **content-first**: pages are listed by title with the file they
//! were written to as secondary context, and `check` prints an inventory of
//! the datasets before any problems.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Pages
//! 001 Home → index.html
//! 002 About → about/index.html
//! ...
//!     Not Found → 404.html
//!
//! Assets
//!     3 files → dist/assets
//!
//! Generated 7 pages
//! ```
//!
//! ## Check
//!
//! ```text
//! Content
//!     6 nav items
//!     6 projects (1 in progress)
//!     2 experiences
//!     26 skills in 4 categories
//!     3 assets
//!
//! Projects
//! 001 Statistical Website for Soccer Players (10 tags)
//! ...
//! 006 IdeaBoard (4 tags, in progress)
//!
//! Issues
//!     error: asset '/assets/images/BECU.jpg' not found at site/assets/images/BECU.jpg
//!
//! Check failed: 1 error, 0 warnings
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::check::{CheckReport, Severity};
use crate::content::{PROJECTS, SKILLS};
use crate::generate::{ASSETS_DIR, BuildReport};
use crate::route::Route;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for page in &report.pages {
        let file = page.file.display();
        let line = match Route::ALL.iter().position(|r| *r == page.route) {
            Some(pos) => format!("{} {} \u{2192} {}", format_index(pos + 1), page.route.title(), file),
            None => format!("{}{} \u{2192} {}", indent(1), page.route.title(), file),
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!(
        "{}{} \u{2192} {}",
        indent(1),
        plural(report.assets_copied, "file", "files"),
        report.output_dir.join(ASSETS_DIR).display()
    ));

    lines.push(String::new());
    lines.push(format!("Generated {}", plural(report.pages.len(), "page", "pages")));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    let in_progress = PROJECTS.iter().filter(|p| p.in_progress).count();
    let mut lines = vec![
        "Content".to_string(),
        format!("{}{}", indent(1), plural(report.nav_items, "nav item", "nav items")),
        format!(
            "{}{} ({} in progress)",
            indent(1),
            plural(report.projects, "project", "projects"),
            in_progress
        ),
        format!("{}{}", indent(1), plural(report.experiences, "experience", "experiences")),
        format!(
            "{}{} in {}",
            indent(1),
            plural(report.skills, "skill", "skills"),
            plural(SKILLS.len(), "category", "categories")
        ),
        format!("{}{}", indent(1), plural(report.assets_checked, "asset", "assets")),
    ];

    lines.push(String::new());
    lines.push("Projects".to_string());
    for (i, project) in PROJECTS.iter().enumerate() {
        let tags = plural(project.tech_stack.len(), "tag", "tags");
        let detail = if project.in_progress {
            format!("{tags}, in progress")
        } else {
            tags
        };
        lines.push(format!("{} {} ({})", format_index(i + 1), project.title, detail));
    }

    if !report.issues.is_empty() {
        lines.push(String::new());
        lines.push("Issues".to_string());
        let mut issues: Vec<_> = report.issues.iter().collect();
        issues.sort_by(|a, b| b.severity.cmp(&a.severity));
        for issue in issues {
            lines.push(format!("{}{}: {}", indent(1), issue.severity, issue.message));
        }
    }

    let errors = report
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = report.issues.len() - errors;
    lines.push(String::new());
    lines.push(format!(
        "Check {}: {}, {}",
        if errors == 0 { "passed" } else { "failed" },
        plural(errors, "error", "errors"),
        plural(warnings, "warning", "warnings")
    ));
    lines
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
