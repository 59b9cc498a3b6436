//! Generic JSON HTTP client.
//!
//! Method-specific, type-parameterized request helpers so call sites never
//! construct raw requests. The client is stateless across calls; each
//! operation performs one round trip and classifies the outcome into
//! [`Error`].

use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, trace};

use kennel_core::{Error, Result, TransportError, join_id};

/// HTTP client for JSON REST requests.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a new client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("kennel/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Issue a GET request and deserialize the 2xx response body.
    pub async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = parse_url(url)?;
        debug!(%url, "GET");

        let response = self.client.get(url).send().await.map_err(transport)?;

        read_json(response).await
    }

    /// Serialize `body` to JSON and POST it, deserializing the response.
    ///
    /// Serialization happens before any network work; an unencodable payload
    /// fails with [`Error::JsonEncode`] and nothing is sent.
    pub async fn post<B, R>(&self, url: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = parse_url(url)?;
        let body = encode(body)?;
        debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport)?;

        read_json(response).await
    }

    /// Serialize `body` to JSON and PUT it, deserializing the response.
    ///
    /// The URL must already address the target item; this method does not
    /// inspect the payload for an id.
    pub async fn put<B, R>(&self, url: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = parse_url(url)?;
        let body = encode(body)?;
        debug!(%url, "PUT");

        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport)?;

        read_json(response).await
    }

    /// Issue a DELETE for item `id` under `url`.
    ///
    /// Succeeds on any 2xx status; the response body is ignored.
    pub async fn delete(&self, url: &str, id: i64) -> Result<()> {
        let url = parse_url(&join_id(url, id))?;
        debug!(%url, "DELETE");

        let response = self.client.delete(url).send().await.map_err(transport)?;

        let status = response.status();
        trace!(status = %status, "response");
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::BadStatus(status.as_u16()))
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a URL string, mapping failure to [`Error::BadUrl`].
fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|_| Error::BadUrl)
}

/// Serialize a payload, mapping failure to [`Error::JsonEncode`].
fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|_| Error::JsonEncode)
}

/// Validate the status code and deserialize a 2xx body.
///
/// Non-2xx responses fail with [`Error::BadStatus`] without touching the
/// body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    trace!(status = %status, "response");

    if !status.is_success() {
        return Err(Error::BadStatus(status.as_u16()));
    }

    let body = response.bytes().await.map_err(transport)?;
    serde_json::from_slice(&body).map_err(Error::Decode)
}

/// Classify a reqwest error into the transport taxonomy.
fn transport(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}
