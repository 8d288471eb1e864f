use async_trait::async_trait;
use mockall::automock;
use reqwest::header;
use reqwest::{Client as HTTPClient, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error as ThisError;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

const QUOTE_SUMMARY_PATH: &str = "v10/finance/quoteSummary/";

const CRUMB_PATH: &str = "v1/test/getcrumb";

// Earlier modules win when two of them carry the same key.
const MODULES: [&str; 5] = [
    "price",
    "summaryProfile",
    "summaryDetail",
    "defaultKeyStatistics",
    "financialData",
];

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
    #[error("Authentication error: {0}")]
    Authentication(String),
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Flat key-value record of everything the provider knows about one symbol.
///
/// Keys are the provider's own field names (`longName`, `marketCap`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Info(Map<String, Value>);

impl Info {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Info {
    fn from(map: Map<String, Value>) -> Self {
        Info(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Info {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Info(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

#[derive(Deserialize, Debug)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummary,
}

#[derive(Deserialize, Debug)]
struct QuoteSummary {
    result: Option<Vec<Map<String, Value>>>,
    error: Option<QuoteSummaryError>,
}

#[derive(Deserialize, Debug)]
struct QuoteSummaryError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Clone, Debug)]
struct Session {
    cookie: String,
    crumb: String,
}

/// Market data provider contract.
///
/// `Ok(None)` means the provider has nothing for the symbol; transport and decoding failures
/// are errors.
#[automock]
#[async_trait]
pub trait Interface: Send + Sync {
    async fn fetch_info(&self, symbol: &str) -> Result<Option<Info>, Error>;
}

/// Yahoo Finance quoteSummary client.
pub struct Client {
    base_url: Url,
    cookie_url: Url,
    http_client: HTTPClient,
    session: RwLock<Option<Session>>,
}

impl Client {
    /// `base_url` is the quote host root, `cookie_url` the page that hands out the session cookie.
    pub fn new(base_url: &str, cookie_url: &str) -> Result<Self, Error> {
        Ok(Client {
            base_url: Url::parse(base_url)?,
            cookie_url: Url::parse(cookie_url)?,
            http_client: HTTPClient::new(),
            session: RwLock::new(None),
        })
    }

    fn quote_summary_url(&self, symbol: &str, crumb: &str) -> Result<Url, Error> {
        let mut url = self.base_url.join(QUOTE_SUMMARY_PATH)?;

        url.path_segments_mut()
            .map_err(|_| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(symbol);

        url.query_pairs_mut()
            .append_pair("modules", &MODULES.join(","))
            .append_pair("crumb", crumb);

        Ok(url)
    }

    async fn session(&self) -> Result<Session, Error> {
        if let Some(session) = self.session.read().await.as_ref() {
            return Ok(session.clone());
        }

        let mut guard = self.session.write().await;

        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }

        let session = self.authenticate().await?;

        *guard = Some(session.clone());

        Ok(session)
    }

    async fn authenticate(&self) -> Result<Session, Error> {
        debug!("Requesting Yahoo session cookie from {}", self.cookie_url);

        // The cookie page answers 404 while still setting the cookie, so the status is ignored.
        let response = self
            .http_client
            .get(self.cookie_url.clone())
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(';').next())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .ok_or_else(|| Error::Authentication("No session cookie returned".to_string()))?;

        let crumb_url = self.base_url.join(CRUMB_PATH)?;

        let crumb = self
            .http_client
            .get(crumb_url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let crumb = crumb.trim().to_string();

        if crumb.is_empty() || crumb.contains('<') {
            return Err(Error::Authentication("Invalid crumb returned".to_string()));
        }

        Ok(Session { cookie, crumb })
    }
}

fn flatten_modules(result: &Map<String, Value>) -> Info {
    let mut info = Info::new();

    for module in MODULES {
        let Some(Value::Object(fields)) = result.get(module) else {
            continue;
        };

        for (key, value) in fields {
            if info.contains_key(key) {
                continue;
            }

            let value = match value {
                Value::Object(object) => match object.get("raw") {
                    Some(raw) => raw.clone(),
                    None => continue,
                },
                Value::Array(_) => continue,
                other => other.clone(),
            };

            info.insert(key.clone(), value);
        }
    }

    info
}

#[async_trait]
impl Interface for Client {
    async fn fetch_info(&self, symbol: &str) -> Result<Option<Info>, Error> {
        let session = self.session().await?;

        let url = self.quote_summary_url(symbol, &session.crumb)?;

        let response = self
            .http_client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &session.cookie)
            .send()
            .await?;

        let status = response.status();

        debug!("Yahoo quoteSummary for {} answered {}", symbol, status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                debug!("Dropping Yahoo session after unauthorized response");
                *self.session.write().await = None;
            }

            let body = response.text().await.unwrap_or_default();

            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        let summary: QuoteSummaryResponse = serde_json::from_str(&body)?;

        if let Some(error) = &summary.quote_summary.error {
            debug!(
                "Yahoo quoteSummary error for {}: {} {}",
                symbol,
                error.code.as_deref().unwrap_or_default(),
                error.description.as_deref().unwrap_or_default(),
            );
        }

        let info = summary
            .quote_summary
            .result
            .as_ref()
            .and_then(|results| results.first())
            .map(flatten_modules);

        Ok(info)
    }
}
