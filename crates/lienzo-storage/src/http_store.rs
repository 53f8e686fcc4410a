use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use lienzo_core::domain::BlobKey;
use lienzo_core::ports::{BlobError, BlobStore};

/// Object store remoto accesible por HTTP (API XML estilo GCS/S3):
/// `GET|PUT|HEAD {endpoint}/{bucket}/{path}`.
#[derive(Debug, Clone)]
pub struct HttpBlobStore {
  client: Client,
  endpoint: String,
  token: Option<String>,
}

impl HttpBlobStore {
  pub fn new(endpoint: impl Into<String>, token: Option<String>, timeout: Duration) -> Result<Self, BlobError> {
    let client = Client::builder()
      .timeout(timeout)
      .build()
      .map_err(|e| BlobError::Unavailable(format!("http client: {e}")))?;

    Ok(Self { client, endpoint: endpoint.into(), token })
  }

  pub fn url_for(&self, key: &BlobKey) -> String {
    // `BlobKey` ya se formatea como `/{bucket}/{path}`.
    format!("{}{}", self.endpoint.trim_end_matches('/'), key)
  }

  fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match &self.token {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }
}

/// Traduce un estado HTTP no exitoso al error del port.
pub(crate) fn status_error(status: StatusCode, key: &BlobKey) -> BlobError {
  match status {
    StatusCode::NOT_FOUND => BlobError::NotFound(key.to_string()),
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BlobError::Denied(format!("{key}: {status}")),
    _ => BlobError::Unavailable(format!("{key}: {status}")),
  }
}

fn transport_error(e: reqwest::Error) -> BlobError {
  BlobError::Unavailable(e.to_string())
}

#[async_trait]
impl BlobStore for HttpBlobStore {
  async fn get(&self, key: &BlobKey) -> Result<Vec<u8>, BlobError> {
    let resp = self.authorize(self.client.get(self.url_for(key))).send().await.map_err(transport_error)?;

    if !resp.status().is_success() {
      return Err(status_error(resp.status(), key));
    }
    let bytes = resp.bytes().await.map_err(transport_error)?;
    Ok(bytes.to_vec())
  }

  async fn put(&self, key: &BlobKey, bytes: &[u8], content_type: &str) -> Result<(), BlobError> {
    let req = self
      .client
      .put(self.url_for(key))
      .header(reqwest::header::CONTENT_TYPE, content_type)
      .body(bytes.to_vec());

    let resp = self.authorize(req).send().await.map_err(transport_error)?;
    if !resp.status().is_success() {
      return Err(status_error(resp.status(), key));
    }

    debug!(%key, content_type, "blob uploaded");
    Ok(())
  }

  async fn exists(&self, key: &BlobKey) -> Result<bool, BlobError> {
    let resp = self.authorize(self.client.head(self.url_for(key))).send().await.map_err(transport_error)?;

    match resp.status() {
      s if s.is_success() => Ok(true),
      StatusCode::NOT_FOUND => Ok(false),
      s => Err(status_error(s, key)),
    }
  }
}
