use crate::errors::Error;
use crate::quote::{self, QuoteRecord};
use crate::state::State;
use axum::{
    extract::{RawQuery, State as AxumState},
    routing::get,
    Json, Router,
};
use url::form_urlencoded;

const SYMBOL: &str = "symbol";

// The first `symbol` wins when the parameter is repeated.
fn symbol_from(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == SYMBOL)
        .map(|(_, value)| value.into_owned())
}

async fn get_company_data(
    AxumState(state): AxumState<State>,
    RawQuery(query): RawQuery,
) -> Result<Json<QuoteRecord>, Error> {
    let symbol = symbol_from(query.as_deref());

    let record = quote::fetch(state.market_data.as_ref(), symbol.as_deref()).await?;

    Ok(Json(record))
}

pub fn router() -> Router<State> {
    Router::new().route("/company-data", get(get_company_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_from_query() {
        assert_eq!(symbol_from(None), None);
        assert_eq!(symbol_from(Some("")), None);
        assert_eq!(symbol_from(Some("ticker=AAPL")), None);
        assert_eq!(symbol_from(Some("symbol")), Some(String::new()));
        assert_eq!(symbol_from(Some("symbol=")), Some(String::new()));
        assert_eq!(symbol_from(Some("symbol=TCS.NS")), Some("TCS.NS".to_string()));
        assert_eq!(symbol_from(Some("symbol=BRK%2DB")), Some("BRK-B".to_string()));
    }

    #[test]
    fn test_symbol_from_repeated_parameter() {
        assert_eq!(
            symbol_from(Some("symbol=AAPL&symbol=MSFT")),
            Some("AAPL".to_string())
        );
        assert_eq!(
            symbol_from(Some("format=json&symbol=MSFT&symbol=")),
            Some("MSFT".to_string())
        );
    }
}
