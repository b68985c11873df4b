//! HTTP client for the NSX Manager policy API
//!
//! One blocking request per call: basic auth, JSON content type, certificate
//! verification disabled. No retry and no timeout beyond reqwest defaults.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

use crate::config::ManagerSettings;
use crate::error::{DfwError, DfwResult};

use super::{ApiError, HttpMethod, ManagerApi};

/// Talks to a live manager over HTTPS
pub struct ManagerClient {
    settings: ManagerSettings,
    base_url: String,
    http: Client,
}

impl ManagerClient {
    /// Create a client for the given manager
    ///
    /// Managers usually present self-signed certificates, so the client accepts
    /// any certificate.
    pub fn new(settings: ManagerSettings) -> DfwResult<Self> {
        let http = Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| DfwError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = settings.base_url();
        Ok(Self {
            settings,
            base_url,
            http,
        })
    }

    /// Client aimed at an arbitrary root, e.g. a plain-http loopback server
    #[cfg(test)]
    fn with_base_url(settings: ManagerSettings, base_url: impl Into<String>) -> DfwResult<Self> {
        let mut client = Self::new(settings)?;
        client.base_url = base_url.into();
        client.http = Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| DfwError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(client)
    }

    /// Settings this client was built with
    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ManagerApi for ManagerClient {
    fn call(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> Result<Option<Value>, ApiError> {
        let url = self.url(path);
        debug!(
            method = %method,
            %url,
            body_bytes = body.map_or(0, str::len),
            "sending manager request"
        );

        let mut request = self
            .http
            .request(method.into(), &url)
            .basic_auth(self.settings.username(), Some(self.settings.password()))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body.to_owned());
        }

        let response = request
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| ApiError::Transport(format!("Failed to read response body: {}", e)))?;

        debug!(status, response_bytes = text.len(), "manager responded");
        parse_response(status, &text)
    }
}

/// Turn a status code and body into the call result
///
/// 2xx with an empty body yields `None`; any other status is an
/// [`ApiError::Status`] carrying the raw body.
pub fn parse_response(status: u16, body: &str) -> Result<Option<Value>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            status,
            body: body.to_string(),
        });
    }

    if body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| ApiError::Transport(format!("Manager returned invalid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// One request as seen by the loopback server
    struct CapturedRequest {
        request_line: String,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    }

    impl CapturedRequest {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        }
    }

    /// Serve exactly one canned response on 127.0.0.1 and hand back what was received
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, mpsc::Receiver<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((key, value)) = line.split_once(':') {
                    headers.push((key.trim().to_string(), value.trim().to_string()));
                }
            }

            let length = headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
                .map_or(0, |(_, value)| value.parse::<usize>().unwrap());
            let mut request_body = vec![0; length];
            reader.read_exact(&mut request_body).unwrap();

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            tx.send(CapturedRequest {
                request_line: request_line.trim_end().to_string(),
                headers,
                body: request_body,
            })
            .unwrap();
        });

        (base_url, rx)
    }

    fn loopback_client(base_url: &str) -> ManagerClient {
        let settings = ManagerSettings::new("nsx.lab.local", "admin", "secret").unwrap();
        ManagerClient::with_base_url(settings, base_url).unwrap()
    }

    #[test]
    fn test_get_sends_auth_and_filter() {
        let (base_url, received) = serve_once("HTTP/1.1 200 OK", r#"{"resource_type": "Infra"}"#);
        let client = loopback_client(&base_url);

        let value = client
            .call(HttpMethod::Get, "/policy/api/v1/infra?filter=Type-Service", None)
            .unwrap();
        assert_eq!(value, Some(json!({"resource_type": "Infra"})));

        let request = received.recv().unwrap();
        assert_eq!(
            request.request_line,
            "GET /policy/api/v1/infra?filter=Type-Service HTTP/1.1"
        );
        // base64("admin:secret")
        assert_eq!(request.header("authorization"), Some("Basic YWRtaW46c2VjcmV0"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert!(request.body.is_empty());
    }

    #[test]
    fn test_patch_sends_body_unchanged() {
        let (base_url, received) = serve_once("HTTP/1.1 200 OK", "");
        let client = loopback_client(&base_url);
        let body = r#"{"resource_type":"Infra","children":[{"resource_type":"ChildService"}]}"#;

        let value = client
            .call(HttpMethod::Patch, "/policy/api/v1/infra", Some(body))
            .unwrap();
        assert_eq!(value, None);

        let request = received.recv().unwrap();
        assert_eq!(request.request_line, "PATCH /policy/api/v1/infra HTTP/1.1");
        assert_eq!(request.header("authorization"), Some("Basic YWRtaW46c2VjcmV0"));
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.body, body.as_bytes());
    }

    #[test]
    fn test_rejection_carries_status_and_body() {
        let (base_url, received) = serve_once(
            "HTTP/1.1 400 Bad Request",
            r#"{"error_message": "invalid reference"}"#,
        );
        let client = loopback_client(&base_url);

        let err = client
            .call(HttpMethod::Patch, "/policy/api/v1/infra", Some("{}"))
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.error_message().unwrap(), "invalid reference");
        received.recv().unwrap();
    }

    #[test]
    fn test_success_with_body() {
        let value = parse_response(200, r#"{"resource_type": "Infra"}"#).unwrap();
        assert_eq!(value, Some(json!({"resource_type": "Infra"})));
    }

    #[test]
    fn test_success_without_body() {
        assert_eq!(parse_response(200, "").unwrap(), None);
        assert_eq!(parse_response(204, "").unwrap(), None);
    }

    #[test]
    fn test_error_status_keeps_raw_body() {
        let err = parse_response(400, r#"{"error_message": "invalid reference"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                body: r#"{"error_message": "invalid reference"}"#.to_string(),
            }
        );
    }

    #[test]
    fn test_success_with_garbage_body() {
        let err = parse_response(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_url_building() {
        let settings = ManagerSettings::new("10.0.0.5", "admin", "pw").unwrap();
        let client = ManagerClient::new(settings).unwrap();
        assert_eq!(
            client.url("/policy/api/v1/infra"),
            "https://10.0.0.5/policy/api/v1/infra"
        );
    }
}
