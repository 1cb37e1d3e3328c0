//! # Portfolio
//!
//! A personal portfolio site: six pages behind a sidebar navigation shell,
//! with a contact form that hands messages to an email relay.
//!
//! All content (profile, projects, experience, skills) is compiled into the
//! binary as static datasets. The same renderers back two outputs:
//!
//! ```text
//! portfolio build   content  →  dist/            (plain HTML + assets)
//! portfolio serve   content  →  http://host:port (HTML + POST /contact)
//! portfolio check   content + site/assets → report
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Record types for the datasets (`ProjectRecord`, `ExperienceRecord`, ...) |
//! | [`content`] | The datasets themselves, in display order |
//! | [`route`] | Exact-match path → [`route::Route`] table, including the 404 route |
//! | [`nav`] | Sidebar shell: active-link highlighting and mobile menu state |
//! | [`pages`] | Maud renderers, one per route, and the document shell |
//! | [`contact`] | Contact form fields, validation, and the submit state machine |
//! | [`relay`] | Email relay seam and the EmailJS implementation |
//! | [`server`] | `tiny_http` server: pages, assets, contact endpoint |
//! | [`generate`] | Static build into an output directory |
//! | [`check`] | Dataset and asset validation |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Server-Side Routing
//!
//! Every page is a separate document. The router is a pure function from
//! path to route, so the static build and the live server agree on what each
//! URL shows, and an unknown URL gets the same not-found page from both.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error and all
//! interpolation is auto-escaped, which matters for the contact form: user
//! input is echoed back into the page after a failed submit.
//!
//! ## No JavaScript Required
//!
//! The mobile menu is a checkbox toggle styled with CSS, and the contact form
//! is a plain `POST`. The only script disables the submit button while a
//! message is in flight.
//!
//! ## Credentials Stay in the Environment
//!
//! Relay identifiers are read from `EMAILJS_*` variables at server start and
//! never appear in `config.toml` or the generated HTML.

pub mod check;
pub mod config;
pub mod contact;
pub mod content;
pub mod generate;
pub mod nav;
pub mod output;
pub mod pages;
pub mod relay;
pub mod route;
pub mod server;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
