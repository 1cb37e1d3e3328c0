//! Path → page routing.
//!
//! The route table is six exact-match entries. Matching is plain string
//! equality after the query string and fragment are dropped: `/projects/`
//! and `/Projects` are not `/projects`. Anything unmatched resolves to
//! [`Route::NotFound`], which renders a dedicated page with a 404 status.

/// The page mounted for a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Experience,
    Skills,
    Contact,
    NotFound,
}

impl Route {
    /// The six content routes, in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Projects,
        Route::Experience,
        Route::Skills,
        Route::Contact,
    ];

    /// Resolve a request path to exactly one route.
    pub fn resolve(path: &str) -> Route {
        match strip_query(path) {
            "/" => Route::Home,
            "/about" => Route::About,
            "/projects" => Route::Projects,
            "/experience" => Route::Experience,
            "/skills" => Route::Skills,
            "/contact" => Route::Contact,
            _ => Route::NotFound,
        }
    }

    /// Canonical path. `NotFound` has none.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::About => Some("/about"),
            Route::Projects => Some("/projects"),
            Route::Experience => Some("/experience"),
            Route::Skills => Some("/skills"),
            Route::Contact => Some("/contact"),
            Route::NotFound => None,
        }
    }

    /// Document title fragment.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Experience => "Experience",
            Route::Skills => "Skills",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }

    /// File written by the static build, relative to the output directory.
    ///
    /// Each content route gets a directory index so that `/about` is served
    /// by any plain file server; the not-found page is `404.html`, the name
    /// most static hosts look for.
    pub fn output_file(self) -> &'static str {
        match self {
            Route::Home => "index.html",
            Route::About => "about/index.html",
            Route::Projects => "projects/index.html",
            Route::Experience => "experience/index.html",
            Route::Skills => "skills/index.html",
            Route::Contact => "contact/index.html",
            Route::NotFound => "404.html",
        }
    }

    /// HTTP status the page is served with.
    pub fn status(self) -> u16 {
        match self {
            Route::NotFound => 404,
            _ => 200,
        }
    }
}

/// Drop `?query` and `#fragment` from a request target.
pub fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
