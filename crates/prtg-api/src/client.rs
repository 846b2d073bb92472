// PRTG API HTTP client
//
// Wraps `reqwest::Client` with PRTG-specific URL construction (credentials in
// the query string), status-code mapping, and content-kind detection. The
// body is handed back undecoded; `prtg-core` owns the decoding.

use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, trace};
use url::Url;

use crate::auth::Credentials;
use crate::content::ContentKind;
use crate::error::Error;
use crate::request::Request;
use crate::transport::TransportConfig;

/// A successful response: the raw body and the format it is written in.
#[derive(Debug, Clone)]
pub struct Payload {
    pub body: Bytes,
    pub kind: ContentKind,
}

/// Raw HTTP client for a PRTG server.
///
/// Holds only read-only configuration, so a single instance can serve
/// concurrent callers. Every call performs exactly one GET.
pub struct PrtgClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    timeout: Duration,
}

impl PrtgClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `server` is the PRTG root, e.g. `https://prtg.example.com` or
    /// `http://10.0.0.5:8080`.
    pub fn new(
        server: &str,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = parse_server_url(server)?;
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            credentials,
            timeout: transport.timeout,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// `timeout` is only used to report [`Error::Timeout`]; the HTTP client
    /// is expected to enforce it.
    pub fn with_client(
        http: reqwest::Client,
        server: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: parse_server_url(server)?,
            credentials,
            timeout,
        })
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build the full request URL: endpoint path, then credentials, then
    /// the request's own parameters.
    pub fn url(&self, request: &Request) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(request.path());
        url.set_query(None);
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in self.credentials.query_pairs() {
                query.append_pair(key, value);
            }
            for (key, value) in request.params() {
                query.append_pair(key, value);
            }
        }
        url
    }

    // ── Fetch ────────────────────────────────────────────────────────

    /// Send a GET for `request` and return the raw body.
    ///
    /// HTTP 401 maps to [`Error::Authentication`], 404 to [`Error::NotFound`],
    /// any other non-2xx to [`Error::Http`]. A request that exceeds the
    /// configured timeout is aborted and reported as [`Error::Timeout`].
    pub async fn fetch(&self, request: &Request) -> Result<Payload, Error> {
        let url = self.url(request);
        debug!(path = request.path(), params = ?request.params(), "GET");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "wrong username and/or password (HTTP 401)".into(),
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                path: request.path().to_owned(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let preview: String = body.chars().take(200).collect();
            return Err(Error::Http {
                status: status.as_u16(),
                message: preview,
            });
        }

        let kind = ContentKind::from_headers(resp.headers(), request.requested_format());
        let body = resp.bytes().await.map_err(|e| self.classify(e))?;
        trace!(%kind, bytes = body.len(), "response received");

        Ok(Payload { body, kind })
    }

    /// Turn reqwest timeouts into our own variant, keep everything else.
    fn classify(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            Error::Transport(err)
        }
    }
}

fn parse_server_url(raw: &str) -> Result<Url, Error> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::UnsupportedScheme(other.to_owned())),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::request::Endpoint;

    fn client(server: &str) -> PrtgClient {
        PrtgClient::with_client(
            reqwest::Client::new(),
            server,
            Credentials::password("user", SecretString::from("pass")),
            Duration::from_secs(10),
        )
        .unwrap()
    }

    #[test]
    fn url_carries_credentials_then_params() {
        let c = client("https://prtg.example.com");
        let req = Request::new(Endpoint::SensorDetails).param("id", 0);
        assert_eq!(
            c.url(&req).as_str(),
            "https://prtg.example.com/api/getsensordetails.json?username=user&password=pass&id=0"
        );
    }

    #[test]
    fn url_replaces_base_path_and_query() {
        let c = client("http://10.0.0.5:8080/ignored?x=1");
        let req = Request::new(Endpoint::SensorTree).param("content", "sensortree");
        let url = c.url(&req);
        assert_eq!(url.path(), "/api/table.xml");
        assert_eq!(
            url.query(),
            Some("username=user&password=pass&content=sensortree")
        );
    }

    #[test]
    fn server_without_scheme_is_rejected() {
        let result = PrtgClient::with_client(
            reqwest::Client::new(),
            "localhost",
            Credentials::password("user", SecretString::from("pass")),
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let result = PrtgClient::with_client(
            reqwest::Client::new(),
            "ftp://prtg.example.com",
            Credentials::password("user", SecretString::from("pass")),
            Duration::from_secs(1),
        );
        assert!(matches!(result, Err(Error::UnsupportedScheme(s)) if s == "ftp"));
    }
}
