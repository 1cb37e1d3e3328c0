//! Built-in HTTP server.
//!
//! Serves the rendered pages, the asset tree, and the contact form endpoint
//! from a `tiny_http` accept loop. Each request is handled on its own thread,
//! so a contact submit waiting on the relay holds up only its own response.
//!
//! Dispatch lives in [`App::handle`], which maps an [`Incoming`] request to
//! a [`Reply`] without touching sockets. The loop in [`serve`] only moves
//! bytes between `tiny_http` and that function.
//!
//! | Request | Reply |
//! |---------|-------|
//! | `GET` content route | 200, page HTML |
//! | `GET` anything else outside `/assets/` | 404, not-found page |
//! | `GET /assets/...` | file, or 404 |
//! | `POST /contact` | 200, contact page showing the submit outcome |
//! | `POST /contact` over [`MAX_BODY_BYTES`] | 413, contact page in error, relay not called |
//! | other | 405 |

use crate::config::SiteConfig;
use crate::contact::{ContactFlow, ContactForm, SubmissionStatus};
use crate::generate::ASSETS_DIR;
use crate::nav::NavShell;
use crate::pages::Site;
use crate::relay::{EmailJsRelay, RelayCredentials, RelayError, RelayProvider};
use crate::route::{Route, strip_query};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Read;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::thread;
use thiserror::Error;
use tiny_http::{Header, Method, Request, Response, Server};

/// Largest accepted form body. Larger posts are refused with 413.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

const HTML: &str = "text/html; charset=utf-8";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("relay setup failed: {0}")]
    Relay(#[from] RelayError),
}

/// The parts of a request dispatch depends on.
#[derive(Debug, Clone)]
pub struct Incoming<'a> {
    pub method: Method,
    pub url: &'a str,
    pub body: &'a str,
    pub if_none_match: Option<&'a str>,
}

impl<'a> Incoming<'a> {
    pub fn get(url: &'a str) -> Self {
        Self {
            method: Method::Get,
            url,
            body: "",
            if_none_match: None,
        }
    }

    pub fn post(url: &'a str, body: &'a str) -> Self {
        Self {
            method: Method::Post,
            url,
            body,
            if_none_match: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Quoted strong validator, set on HTML replies.
    pub etag: Option<String>,
    /// `Allow` header for 405 replies.
    pub allow: Option<&'static str>,
}

impl Reply {
    fn html(status: u16, body: String) -> Self {
        let etag = Some(etag_for(body.as_bytes()));
        Self {
            status,
            content_type: HTML,
            body: body.into_bytes(),
            etag,
            allow: None,
        }
    }

    fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.as_bytes().to_vec(),
            etag: None,
            allow: None,
        }
    }

    fn not_modified(etag: String) -> Self {
        Self {
            status: 304,
            content_type: HTML,
            body: Vec::new(),
            etag: Some(etag),
            allow: None,
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn etag_for(body: &[u8]) -> String {
    format!("\"{:x}\"", Sha256::digest(body))
}

/// Content type by file extension. Unknown extensions are served as bytes.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Map the part of a URL after `/assets/` to a file under `root`.
///
/// Returns `None` for anything that could leave `root`: `..`, absolute
/// components, or hidden files.
fn asset_path(root: &Path, rest: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(rest).ok()?;
    let relative = Path::new(decoded.as_ref());
    let mut path = root.to_path_buf();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                if part.to_str().is_none_or(|p| p.starts_with('.')) {
                    return None;
                }
                path.push(part);
            }
            Component::CurDir => {}
            _ => return None,
        }
    }
    (path != root).then_some(path)
}

/// Everything a request needs: the rendered site, the asset root, and the
/// relay contact submissions go through.
pub struct App {
    site: Site,
    asset_root: PathBuf,
    relay: Box<dyn RelayProvider>,
}

impl App {
    pub fn new(site: Site, asset_root: PathBuf, relay: Box<dyn RelayProvider>) -> Self {
        Self {
            site,
            asset_root,
            relay,
        }
    }

    pub fn handle(&self, request: &Incoming) -> Reply {
        let path = strip_query(request.url);
        let reply = match request.method {
            Method::Get | Method::Head => match path.strip_prefix("/assets/") {
                Some(rest) => self.asset(rest),
                None => self.page(path),
            },
            Method::Post if path == "/contact" => self.contact(request.body),
            Method::Post => Reply {
                allow: Some("GET, HEAD"),
                ..Reply::text(405, "Method Not Allowed")
            },
            _ => Reply {
                allow: Some("GET, HEAD, POST"),
                ..Reply::text(405, "Method Not Allowed")
            },
        };

        let cacheable = matches!(request.method, Method::Get | Method::Head);
        if cacheable && reply.status == 200 {
            if let (Some(etag), Some(seen)) = (reply.etag.as_deref(), request.if_none_match) {
                if seen == etag {
                    return Reply::not_modified(etag.to_string());
                }
            }
        }
        reply
    }

    fn page(&self, path: &str) -> Reply {
        let (route, markup) = self.site.render(path, &ContactFlow::new());
        Reply::html(route.status(), markup.into_string())
    }

    fn asset(&self, rest: &str) -> Reply {
        let Some(path) = asset_path(&self.asset_root, rest) else {
            return Reply::text(404, "Not Found");
        };
        match fs::read(&path) {
            Ok(body) => Reply {
                status: 200,
                content_type: content_type_for(&path),
                body,
                etag: None,
                allow: None,
            },
            Err(_) => Reply::text(404, "Not Found"),
        }
    }

    fn contact(&self, body: &str) -> Reply {
        let mut flow = ContactFlow::with_form(ContactForm::from_urlencoded(body));
        if body.len() as u64 > MAX_BODY_BYTES {
            flow.reject(format!("form body exceeds {MAX_BODY_BYTES} bytes"));
            log::warn!("contact submit refused: {} byte body", body.len());
            return self.contact_page(413, &flow);
        }
        match flow.submit(&*self.relay) {
            SubmissionStatus::Success => log::info!("contact message relayed"),
            _ => log::warn!(
                "contact submit failed: {}",
                flow.last_error().unwrap_or("unknown error")
            ),
        }
        self.contact_page(200, &flow)
    }

    fn contact_page(&self, status: u16, flow: &ContactFlow) -> Reply {
        let shell = NavShell::new(Route::Contact.path().unwrap_or("/contact"));
        let markup = self.site.render_route(Route::Contact, &shell, flow);
        Reply::html(status, markup.into_string())
    }
}

/// Bind the configured address and serve until the process is stopped.
pub fn serve(config: &SiteConfig, site_dir: &Path) -> Result<(), ServeError> {
    let credentials = RelayCredentials::from_env();
    for name in credentials.missing() {
        log::warn!("{name} is not set; contact submissions will fail");
    }
    let relay = EmailJsRelay::new(&config.relay, credentials)?;
    let app = Arc::new(App::new(
        Site::new(config),
        site_dir.join(ASSETS_DIR),
        Box::new(relay),
    ));

    let address = config.server.address.clone();
    let server = Server::http(&address).map_err(|source| ServeError::Bind {
        address: address.clone(),
        source,
    })?;
    log::info!("serving on http://{address}");

    run(&server, app);
    Ok(())
}

/// Accept requests until the server is unblocked, one thread per request.
fn run(server: &Server, app: Arc<App>) {
    for request in server.incoming_requests() {
        let app = Arc::clone(&app);
        thread::spawn(move || respond(&app, request));
    }
}

fn respond(app: &App, mut request: Request) {
    // One byte past the limit marks the body as oversized.
    let mut bytes = Vec::new();
    let read = request
        .as_reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut bytes);
    let body = match read {
        Ok(_) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            log::warn!("{} {}: unreadable body: {e}", request.method(), request.url());
            String::new()
        }
    };
    let if_none_match = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("If-None-Match"))
        .map(|h| h.value.as_str().to_string());

    let incoming = Incoming {
        method: request.method().clone(),
        url: request.url(),
        body: &body,
        if_none_match: if_none_match.as_deref(),
    };
    let reply = app.handle(&incoming);
    log::info!("{} {} -> {}", request.method(), request.url(), reply.status);

    if let Err(e) = request.respond(into_response(reply)) {
        log::warn!("failed to send response: {e}");
    }
}

fn into_response(reply: Reply) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    let headers = [
        Some(("Content-Type", reply.content_type.to_string())),
        reply.etag.map(|etag| ("ETag", etag)),
        reply.allow.map(|allow| ("Allow", allow.to_string())),
    ];
    for (name, value) in headers.into_iter().flatten() {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::tests::MockRelay;
    use crate::test_helpers::*;
    use std::sync::Mutex;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    /// Shares a MockRelay between the app and the test body.
    struct SharedRelay(Arc<MockRelay>);

    impl RelayProvider for SharedRelay {
        fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
            self.0.send(form)
        }
    }

    fn app_with(relay: MockRelay) -> (App, Arc<MockRelay>, TempDir) {
        let site_dir = site_with_assets();
        let relay = Arc::new(relay);
        let app = App::new(
            Site::new(&SiteConfig::default()),
            site_dir.path().join(ASSETS_DIR),
            Box::new(SharedRelay(relay.clone())),
        );
        (app, relay, site_dir)
    }

    fn app() -> (App, TempDir) {
        let (app, _, dir) = app_with(MockRelay::succeeding());
        (app, dir)
    }

    /// Relay that reports when a send starts, then takes `delay` to succeed.
    struct SlowRelay {
        delay: Duration,
        started: Mutex<Sender<()>>,
    }

    impl SlowRelay {
        fn new(delay: Duration) -> (Self, Receiver<()>) {
            let (tx, rx) = mpsc::channel();
            let relay = Self {
                delay,
                started: Mutex::new(tx),
            };
            (relay, rx)
        }
    }

    impl RelayProvider for SlowRelay {
        fn send(&self, _form: &ContactForm) -> Result<(), RelayError> {
            let _ = self.started.lock().unwrap().send(());
            thread::sleep(self.delay);
            Ok(())
        }
    }

    fn contact_body(message: &str) -> String {
        format!("name=Ada&email=ada%40example.com&subject=Hi&message={message}")
    }

    // =========================================================================
    // Pages
    // =========================================================================

    #[test]
    fn content_routes_are_200_html() {
        let (app, _dir) = app();
        for route in Route::ALL {
            let path = route.path().unwrap();
            let reply = app.handle(&Incoming::get(path));
            assert_eq!(reply.status, 200, "{path}");
            assert_eq!(reply.content_type, HTML);
            assert_eq!(count(&reply.body_text(), "nav-item active"), 1, "{path}");
        }
    }

    #[test]
    fn unmatched_route_is_404_page() {
        let (app, _dir) = app();
        for path in ["/nope", "/projects/", "/Projects", "/about/team"] {
            let reply = app.handle(&Incoming::get(path));
            assert_eq!(reply.status, 404, "{path}");
            assert!(reply.body_text().contains("not-found-page"), "{path}");
        }
    }

    #[test]
    fn query_string_does_not_change_route() {
        let (app, _dir) = app();
        let reply = app.handle(&Incoming::get("/skills?ref=nav"));
        assert_eq!(reply.status, 200);
        assert!(reply.body_text().contains("skills-page"));
    }

    #[test]
    fn html_replies_have_stable_etag() {
        let (app, _dir) = app();
        let a = app.handle(&Incoming::get("/about"));
        let b = app.handle(&Incoming::get("/about"));
        let etag = a.etag.clone().unwrap();
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(etag.len(), 64 + 2);
        assert_eq!(a.etag, b.etag);
        assert_ne!(a.etag, app.handle(&Incoming::get("/")).etag);
    }

    #[test]
    fn matching_if_none_match_is_304() {
        let (app, _dir) = app();
        let etag = app.handle(&Incoming::get("/projects")).etag.unwrap();
        let reply = app.handle(&Incoming {
            if_none_match: Some(etag.as_str()),
            ..Incoming::get("/projects")
        });
        assert_eq!(reply.status, 304);
        assert!(reply.body.is_empty());

        let stale = app.handle(&Incoming {
            if_none_match: Some("\"stale\""),
            ..Incoming::get("/projects")
        });
        assert_eq!(stale.status, 200);
    }

    // =========================================================================
    // Assets
    // =========================================================================

    #[test]
    fn serves_assets_with_content_type() {
        let (app, _dir) = app();
        let png = app.handle(&Incoming::get("/assets/images/moneymanager.png"));
        assert_eq!(png.status, 200);
        assert_eq!(png.content_type, "image/png");
        assert!(png.body.starts_with(b"\x89PNG"));

        let jpg = app.handle(&Incoming::get("/assets/images/BECU.jpg"));
        assert_eq!(jpg.status, 200);
        assert_eq!(jpg.content_type, "image/jpeg");
    }

    #[test]
    fn missing_asset_is_404() {
        let (app, _dir) = app();
        let reply = app.handle(&Incoming::get("/assets/images/nope.png"));
        assert_eq!(reply.status, 404);
    }

    #[test]
    fn traversal_is_rejected() {
        let (app, dir) = app();
        std::fs::write(dir.path().join("config.toml"), "secret").unwrap();
        for url in [
            "/assets/../config.toml",
            "/assets/images/../../config.toml",
            "/assets/%2e%2e/config.toml",
            "/assets/",
        ] {
            let reply = app.handle(&Incoming::get(url));
            assert_eq!(reply.status, 404, "{url}");
            assert!(!reply.body_text().contains("secret"), "{url}");
        }
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type_for(Path::new("a.JPEG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("a.webp")), "image/webp");
        assert_eq!(content_type_for(Path::new("resume.pdf")), "application/pdf");
        assert_eq!(
            content_type_for(Path::new("blob")),
            "application/octet-stream"
        );
    }

    // =========================================================================
    // Contact
    // =========================================================================

    #[test]
    fn valid_post_relays_once_and_shows_success() {
        let (app, relay, _dir) = app_with(MockRelay::succeeding());
        let reply = app.handle(&Incoming::post(
            "/contact",
            "name=Ada+Lovelace&email=ada%40example.com&subject=&message=Hello%21",
        ));
        assert_eq!(reply.status, 200);
        let html = reply.body_text();
        assert!(html.contains("status-message success"));
        assert!(!html.contains("Ada Lovelace"));

        assert_eq!(relay.call_count(), 1);
        let sent = &relay.sent()[0];
        assert_eq!(sent.name, "Ada Lovelace");
        assert_eq!(sent.email, "ada@example.com");
        assert_eq!(sent.message, "Hello!");
    }

    #[test]
    fn relay_failure_shows_error_and_keeps_fields() {
        let (app, relay, _dir) = app_with(MockRelay::failing());
        let reply = app.handle(&Incoming::post(
            "/contact",
            "name=Ada&email=ada%40example.com&subject=Hi&message=Hello",
        ));
        assert_eq!(reply.status, 200);
        let html = reply.body_text();
        assert!(html.contains("status-message error"));
        assert!(html.contains(r#"value="Ada""#));
        assert!(html.contains(r#"value="Hi""#));
        assert_eq!(relay.call_count(), 1);
    }

    #[test]
    fn invalid_post_never_reaches_relay() {
        let (app, relay, _dir) = app_with(MockRelay::succeeding());
        let reply = app.handle(&Incoming::post("/contact", "name=Ada&email=&message=Hi"));
        assert!(reply.body_text().contains("status-message error"));
        assert_eq!(relay.call_count(), 0);
    }

    #[test]
    fn oversized_post_is_refused_without_relay() {
        let (app, relay, _dir) = app_with(MockRelay::succeeding());
        let body = contact_body(&"a".repeat(70_000));
        let reply = app.handle(&Incoming::post("/contact", &body));

        assert_eq!(reply.status, 413);
        assert_eq!(relay.call_count(), 0);
        let html = reply.body_text();
        assert!(html.contains("status-message error"));
        assert!(!html.contains("status-message success"));
        assert!(html.contains(r#"value="Ada""#));
    }

    #[test]
    fn body_at_limit_is_relayed() {
        let (app, relay, _dir) = app_with(MockRelay::succeeding());
        let prefix = contact_body("").len();
        let body = contact_body(&"a".repeat(MAX_BODY_BYTES as usize - prefix));
        assert_eq!(body.len() as u64, MAX_BODY_BYTES);

        let reply = app.handle(&Incoming::post("/contact", &body));
        assert_eq!(reply.status, 200);
        assert_eq!(relay.call_count(), 1);
        assert_eq!(relay.sent()[0].message.len(), MAX_BODY_BYTES as usize - prefix);
    }

    #[test]
    fn post_never_answers_not_modified() {
        let (app, relay, _dir) = app_with(MockRelay::failing());
        let body = contact_body("Hello");
        let first = app.handle(&Incoming::post("/contact", &body));
        let etag = first.etag.unwrap();

        let again = app.handle(&Incoming {
            if_none_match: Some(etag.as_str()),
            ..Incoming::post("/contact", &body)
        });
        assert_eq!(again.status, 200);
        assert!(!again.body.is_empty());
        assert_eq!(relay.call_count(), 2);
    }

    #[test]
    fn contact_reply_marks_contact_active() {
        let (app, _dir) = app();
        let reply = app.handle(&Incoming::post("/contact", ""));
        let html = reply.body_text();
        assert_eq!(count(&html, "nav-item active"), 1);
        assert!(html.contains(r#"data-nav-id="contact""#));
    }

    // =========================================================================
    // Accept loop
    // =========================================================================

    #[test]
    fn pending_submit_does_not_hold_up_pages() {
        let site_dir = site_with_assets();
        let (relay, started) = SlowRelay::new(Duration::from_secs(3));
        let app = Arc::new(App::new(
            Site::new(&SiteConfig::default()),
            site_dir.path().join(ASSETS_DIR),
            Box::new(relay),
        ));
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let accept = {
            let server = Arc::clone(&server);
            thread::spawn(move || run(&server, app))
        };

        let client = reqwest::blocking::Client::new();
        let submit = {
            let client = client.clone();
            thread::spawn(move || {
                client
                    .post(format!("http://{addr}/contact"))
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(contact_body("Hello"))
                    .send()
                    .unwrap()
                    .status()
                    .as_u16()
            })
        };
        started.recv_timeout(Duration::from_secs(5)).unwrap();

        let begun = Instant::now();
        let page = client.get(format!("http://{addr}/about")).send().unwrap();
        assert_eq!(page.status().as_u16(), 200);
        assert!(
            begun.elapsed() < Duration::from_secs(2),
            "page waited {:?}",
            begun.elapsed()
        );

        assert_eq!(submit.join().unwrap(), 200);
        server.unblock();
        accept.join().unwrap();
    }

    // =========================================================================
    // Methods
    // =========================================================================

    #[test]
    fn post_elsewhere_is_405() {
        let (app, _dir) = app();
        let reply = app.handle(&Incoming::post("/projects", "x=1"));
        assert_eq!(reply.status, 405);
        assert_eq!(reply.allow, Some("GET, HEAD"));
    }

    #[test]
    fn other_methods_are_405() {
        let (app, _dir) = app();
        let reply = app.handle(&Incoming {
            method: Method::Delete,
            ..Incoming::get("/")
        });
        assert_eq!(reply.status, 405);
        assert!(reply.allow.is_some());
    }

    #[test]
    fn response_carries_headers() {
        let (app, _dir) = app();
        let reply = app.handle(&Incoming::get("/"));
        let response = into_response(reply);
        assert_eq!(response.status_code().0, 200);
        let names: Vec<String> = response
            .headers()
            .iter()
            .map(|h| h.field.as_str().to_string())
            .collect();
        assert!(names.iter().any(|n| n == "Content-Type"));
        assert!(names.iter().any(|n| n == "ETag"));
    }
}
