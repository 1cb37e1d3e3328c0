//! Email relay provider.
//!
//! The contact form has no backend of its own: messages are handed to a
//! third-party relay that mails them to the site owner. [`RelayProvider`] is
//! the seam; [`EmailJsRelay`] is the production implementation, talking to
//! the EmailJS REST API.
//!
//! ## Credentials
//!
//! Three opaque identifiers come from the process environment and are never
//! written to `config.toml`:
//!
//! | Variable | EmailJS field |
//! |----------|---------------|
//! | `EMAILJS_SERVICE_ID` | `service_id` |
//! | `EMAILJS_TEMPLATE_ID` | `template_id` |
//! | `EMAILJS_PUBLIC_KEY` | `user_id` |
//!
//! A missing credential does not stop the server from starting; the submit
//! that needs it fails with [`RelayError::MissingCredential`] and the form
//! shows the error status.

use crate::config::RelayConfig;
use crate::contact::ContactForm;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay credential {0} is not set")]
    MissingCredential(&'static str),
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Something that can deliver a contact message.
///
/// `send` is called exactly once per accepted submit; implementations do not
/// retry.
pub trait RelayProvider: Send + Sync {
    fn send(&self, form: &ContactForm) -> Result<(), RelayError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl RelayCredentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            service_id: get(SERVICE_ID_VAR),
            template_id: get(TEMPLATE_ID_VAR),
            public_key: get(PUBLIC_KEY_VAR),
        }
    }

    /// Names of the variables that are not set.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (SERVICE_ID_VAR, &self.service_id),
            (TEMPLATE_ID_VAR, &self.template_id),
            (PUBLIC_KEY_VAR, &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

/// JSON body of an EmailJS `email/send` call.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// EmailJS over HTTPS.
pub struct EmailJsRelay {
    endpoint: String,
    credentials: RelayCredentials,
    client: reqwest::blocking::Client,
}

impl EmailJsRelay {
    pub fn new(config: &RelayConfig, credentials: RelayCredentials) -> Result<Self, RelayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            endpoint: config.endpoint.clone(),
            credentials,
            client,
        })
    }
}

impl RelayProvider for EmailJsRelay {
    fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let service_id = self
            .credentials
            .service_id
            .as_deref()
            .ok_or(RelayError::MissingCredential(SERVICE_ID_VAR))?;
        let template_id = self
            .credentials
            .template_id
            .as_deref()
            .ok_or(RelayError::MissingCredential(TEMPLATE_ID_VAR))?;
        let public_key = self
            .credentials
            .public_key
            .as_deref()
            .ok_or(RelayError::MissingCredential(PUBLIC_KEY_VAR))?;

        let body = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: TemplateParams {
                name: &form.name,
                email: &form.email,
                subject: &form.subject,
                message: &form.message,
            },
        };

        let response = self.client.post(&self.endpoint).json(&body).send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread;

    /// Relay that records every message instead of sending it.
    /// Uses Mutex so it satisfies the `Send + Sync` bound.
    pub struct MockRelay {
        fail: bool,
        sent: Mutex<Vec<ContactForm>>,
    }

    impl MockRelay {
        pub fn succeeding() -> Self {
            Self {
                fail: false,
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn sent(&self) -> Vec<ContactForm> {
            self.sent.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    impl RelayProvider for MockRelay {
        fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
            self.sent.lock().unwrap().push(form.clone());
            if self.fail {
                Err(RelayError::Rejected {
                    status: 400,
                    body: "mock failure".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn full_credentials() -> RelayCredentials {
        RelayCredentials {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "".to_string(),
            message: "Hello there".to_string(),
        }
    }

    /// Serve exactly one request on a local port, answering with `status`.
    /// Returns the endpoint URL and a handle yielding the request body.
    fn one_shot_endpoint(status: u16, reply: &'static str) -> (String, thread::JoinHandle<String>) {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();
        let handle = thread::spawn(move || {
            let mut request = server.recv().unwrap();
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            request
                .respond(tiny_http::Response::from_string(reply).with_status_code(status))
                .unwrap();
            body
        });
        (format!("http://{addr}/api/v1.0/email/send"), handle)
    }

    fn relay_for(endpoint: String, credentials: RelayCredentials) -> EmailJsRelay {
        let config = RelayConfig {
            endpoint,
            timeout_secs: 5,
        };
        EmailJsRelay::new(&config, credentials).unwrap()
    }

    #[test]
    fn credentials_from_lookup() {
        let creds = RelayCredentials::from_lookup(|key| match key {
            SERVICE_ID_VAR => Some("s".to_string()),
            TEMPLATE_ID_VAR => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(creds.service_id.as_deref(), Some("s"));
        assert_eq!(creds.template_id, None);
        assert_eq!(creds.missing(), vec![TEMPLATE_ID_VAR, PUBLIC_KEY_VAR]);
    }

    #[test]
    fn full_credentials_have_nothing_missing() {
        assert!(full_credentials().missing().is_empty());
    }

    #[test]
    fn missing_credential_fails_without_request() {
        let creds = RelayCredentials {
            public_key: None,
            ..full_credentials()
        };
        // Nothing listens on this port; reaching the network would be a
        // transport error rather than MissingCredential.
        let relay = relay_for("http://127.0.0.1:9/send".to_string(), creds);
        let err = relay.send(&form()).unwrap_err();
        assert!(matches!(err, RelayError::MissingCredential(PUBLIC_KEY_VAR)));
    }

    #[test]
    fn posts_emailjs_payload() {
        let (endpoint, handle) = one_shot_endpoint(200, "OK");
        let relay = relay_for(endpoint, full_credentials());
        relay.send(&form()).unwrap();

        let body: serde_json::Value = serde_json::from_str(&handle.join().unwrap()).unwrap();
        assert_eq!(body["service_id"], "service_abc");
        assert_eq!(body["template_id"], "template_xyz");
        assert_eq!(body["user_id"], "pk_123");
        assert_eq!(body["template_params"]["name"], "Ada");
        assert_eq!(body["template_params"]["email"], "ada@example.com");
        assert_eq!(body["template_params"]["subject"], "");
        assert_eq!(body["template_params"]["message"], "Hello there");
    }

    #[test]
    fn non_success_status_is_rejected() {
        let (endpoint, handle) = one_shot_endpoint(400, "The Public Key is invalid");
        let relay = relay_for(endpoint, full_credentials());
        let err = relay.send(&form()).unwrap_err();
        handle.join().unwrap();
        match err {
            RelayError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "The Public Key is invalid");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        let relay = relay_for("http://127.0.0.1:9/send".to_string(), full_credentials());
        let err = relay.send(&form()).unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }
}
