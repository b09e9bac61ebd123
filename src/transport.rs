use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
  pub status: StatusCode,
  pub body: String,
}

/// Moves requests to the indexer. An `Err` means the request never produced
/// an HTTP response.
pub trait Transport: Send + Sync {
  fn get(&self, path: &str) -> Result<Reply>;

  fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Reply>;
}

pub struct HttpTransport {
  client: reqwest::blocking::Client,
  server_url: Url,
}

impl HttpTransport {
  pub fn new(server_url: Url) -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(
      reqwest::header::ACCEPT,
      reqwest::header::HeaderValue::from_static("application/json"),
    );

    Ok(Self {
      client: reqwest::blocking::ClientBuilder::new()
        .timeout(None)
        .default_headers(headers)
        .build()?,
      server_url,
    })
  }

  fn reply(response: reqwest::blocking::Response) -> Result<Reply> {
    let status = response.status();

    let body = response
      .text()
      .context("failed to receive response body")?;

    Ok(Reply { status, body })
  }
}

impl Transport for HttpTransport {
  fn get(&self, path: &str) -> Result<Reply> {
    let url = self.server_url.join(path)?;

    log::debug!("GET {url}");

    Self::reply(
      self
        .client
        .get(url.clone())
        .send()
        .with_context(|| format!("failed to send request to `{url}`"))?,
    )
  }

  fn post_json(&self, path: &str, body: &serde_json::Value) -> Result<Reply> {
    let url = self.server_url.join(path)?;

    log::debug!("POST {url}");

    Self::reply(
      self
        .client
        .post(url.clone())
        .json(body)
        .send()
        .with_context(|| format!("failed to send request to `{url}`"))?,
    )
  }
}
