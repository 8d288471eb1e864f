use crate::catalog::Catalog;
use crate::config::Config;
use std::sync::Arc;
use stockview::data::{Client as DataClient, Error as DataError, Interface};

#[derive(Clone)]
pub struct State {
    pub catalog: &'static Catalog,
    pub market_data: Arc<dyn Interface>,
}

impl State {
    pub fn new(market_data: Arc<dyn Interface>) -> Self {
        Self {
            catalog: Catalog::companies(),
            market_data,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, DataError> {
        let data_client = DataClient::new(&config.yahoo_base_url, &config.yahoo_cookie_url)?;

        Ok(Self::new(Arc::new(data_client)))
    }
}
