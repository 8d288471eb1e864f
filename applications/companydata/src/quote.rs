use crate::errors::Error;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};
use stockview::data::{Info, Interface};
use tracing::{error, info, warn};

/// Placeholder emitted for fields the provider did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

// Its presence is the only signal that the provider recognised the symbol.
const LONG_NAME: &str = "longName";
const SECTOR: &str = "sector";
const INDUSTRY: &str = "industry";
const MARKET_CAP: &str = "marketCap";
const TRAILING_PE: &str = "trailingPE";
const TRAILING_EPS: &str = "trailingEps";
const CURRENT_PRICE: &str = "currentPrice";

#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Value(T),
    NotAvailable,
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(value) => value.serialize(serializer),
            Field::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

fn text(info: &Info, key: &str) -> Field<String> {
    match info.get(key) {
        Some(Value::String(value)) => Field::Value(value.clone()),
        _ => Field::NotAvailable,
    }
}

fn number(info: &Info, key: &str) -> Field<Number> {
    match info.get(key) {
        Some(Value::Number(value)) => Field::Value(value.clone()),
        _ => Field::NotAvailable,
    }
}

/// Seven-field snapshot returned for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRecord {
    #[serde(rename = "Company Name")]
    pub company_name: Field<String>,
    #[serde(rename = "Sector")]
    pub sector: Field<String>,
    #[serde(rename = "Industry")]
    pub industry: Field<String>,
    #[serde(rename = "Market Cap")]
    pub market_cap: Field<Number>,
    #[serde(rename = "PE Ratio (TTM)")]
    pub trailing_pe: Field<Number>,
    #[serde(rename = "EPS (TTM)")]
    pub trailing_eps: Field<Number>,
    #[serde(rename = "Current Price")]
    pub current_price: Field<Number>,
}

impl QuoteRecord {
    pub fn from_info(info: &Info) -> Self {
        QuoteRecord {
            company_name: text(info, LONG_NAME),
            sector: text(info, SECTOR),
            industry: text(info, INDUSTRY),
            market_cap: number(info, MARKET_CAP),
            trailing_pe: number(info, TRAILING_PE),
            trailing_eps: number(info, TRAILING_EPS),
            current_price: number(info, CURRENT_PRICE),
        }
    }
}

/// Looks `symbol` up with the provider and narrows the answer to a [`QuoteRecord`].
pub async fn fetch(provider: &dyn Interface, symbol: Option<&str>) -> Result<QuoteRecord, Error> {
    let symbol = match symbol {
        Some(symbol) if !symbol.is_empty() => symbol,
        _ => {
            warn!("Company data requested without a symbol");
            return Err(Error::MissingParameter);
        }
    };

    info!("Fetching company data for {}", symbol);

    let info = match provider.fetch_info(symbol).await {
        Ok(info) => info,
        Err(err) => {
            error!("Error fetching data for {}: {}", symbol, err);
            return Err(err.into());
        }
    };

    match info {
        Some(info) if info.contains_key(LONG_NAME) => Ok(QuoteRecord::from_info(&info)),
        _ => {
            warn!("No data found for {}", symbol);
            Err(Error::NotFound(symbol.to_string()))
        }
    }
}
