use {
    ppos::error::{PposError, Result},
    reqwest::blocking::Client,
    serde_json::Value,
    std::time::Duration,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP status and body of a JSON-RPC reply
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

pub trait Transport: Send + Sync {
    fn post(&self, request: &Value) -> Result<Reply>;
}

pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PposError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn post(&self, request: &Value) -> Result<Reply> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .map_err(|e| PposError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| PposError::Transport(format!("Failed to read response: {e}")))?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));

        Ok(Reply { status, body })
    }
}
