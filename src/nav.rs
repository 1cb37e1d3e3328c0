//! Sidebar navigation shell.
//!
//! One [`NavShell`] exists per rendered page. It knows the current path (for
//! active-link highlighting) and whether the mobile menu is open.
//!
//! In the generated HTML the mobile menu is a checkbox toggle: the hamburger
//! and the full-screen overlay are both `<label>`s for the same checkbox, so
//! clicking the overlay closes the menu without JavaScript. Following a link
//! loads a new page whose shell starts closed, which is the close-on-navigate
//! coupling the [`NavShell::navigate`] model describes.

use crate::content::{NAV_ITEMS, PROFILE};
use crate::route::{Route, strip_query};
use crate::types::NavItem;
use maud::{Markup, html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavShell {
    current_path: String,
    mobile_menu_open: bool,
}

impl NavShell {
    pub fn new(current_path: &str) -> Self {
        Self {
            current_path: strip_query(current_path).to_string(),
            mobile_menu_open: false,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// The overlay only exists while the menu is open; clicking it closes.
    pub fn click_overlay(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Follow a nav link: update the current path and force the menu closed.
    pub fn navigate(&mut self, path: &str) -> Route {
        self.current_path = strip_query(path).to_string();
        self.mobile_menu_open = false;
        Route::resolve(&self.current_path)
    }

    /// Exact string equality: `/projects` never marks `/` active.
    pub fn is_active(&self, item: &NavItem) -> bool {
        item.path == self.current_path
    }

    /// The single active item, or `None` when the path matches no entry.
    pub fn active_item(&self) -> Option<&'static NavItem> {
        NAV_ITEMS.iter().find(|item| self.is_active(item))
    }
}

/// Renders the mobile toggle, overlay, and sidebar.
pub fn render_nav(shell: &NavShell) -> Markup {
    let open = shell.mobile_menu_open();
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle" autocomplete="off" checked[open];
        label.mobile-menu-button for="nav-toggle" aria-label="Toggle navigation menu" {
            span.hamburger {
                span {}
                span {}
                span {}
            }
        }
        label.mobile-overlay for="nav-toggle" aria-hidden="true" {}
        nav.navbar {
            div.navbar-header {
                div.logo { (PROFILE.initials) }
                div.name { (PROFILE.name) }
            }
            ul.nav-items {
                @for item in &NAV_ITEMS {
                    (render_nav_item(item, shell.is_active(item)))
                }
            }
            div.social-links {
                a.social-link href=(PROFILE.github) target="_blank" rel="noopener noreferrer" aria-label="GitHub" {
                    "GitHub"
                }
                a.social-link href=(PROFILE.linkedin) target="_blank" rel="noopener noreferrer" aria-label="LinkedIn" {
                    "LinkedIn"
                }
            }
        }
    }
}

fn render_nav_item(item: &NavItem, active: bool) -> Markup {
    html! {
        li.nav-item.active[active] data-nav-id=(item.id) {
            a href=(item.path) aria-current=[active.then_some("page")] {
                span.nav-icon aria-hidden="true" { (item.icon.glyph()) }
                span.nav-label { (item.label) }
            }
        }
    }
}
