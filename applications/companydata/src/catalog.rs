use serde::{Serialize, Serializer};

// Kept in ascending symbol order; responses list companies in this order.
const COMPANIES: [(&str, &str); 20] = [
    ("AAPL", "Apple Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("BRK-B", "Berkshire Hathaway Inc."),
    ("DIS", "Walt Disney Co."),
    ("GOOGL", "Alphabet Inc."),
    ("INFY.NS", "Infosys Ltd (India)"),
    ("JNJ", "Johnson & Johnson"),
    ("JPM", "JPMorgan Chase & Co."),
    ("KO", "Coca-Cola Co."),
    ("META", "Meta Platforms Inc."),
    ("MSFT", "Microsoft Corp."),
    ("NFLX", "Netflix Inc."),
    ("NVDA", "NVIDIA Corp."),
    ("PEP", "PepsiCo Inc."),
    ("PFE", "Pfizer Inc."),
    ("PG", "Procter & Gamble Co."),
    ("RELIANCE.NS", "Reliance Industries (India)"),
    ("TCS.NS", "Tata Consultancy Services (India)"),
    ("TSLA", "Tesla Inc."),
    ("V", "Visa Inc."),
];

static CATALOG: Catalog = Catalog {
    entries: &COMPANIES,
};

/// Symbols the service advertises, with their display names.
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [(&'static str, &'static str)],
}

impl Catalog {
    pub fn companies() -> &'static Catalog {
        &CATALOG
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_sorted_and_unique() {
        let catalog = Catalog::companies();

        assert!(catalog.entries.windows(2).all(|pair| pair[0].0 < pair[1].0));
        assert_eq!(catalog.len(), 20);
    }

    #[test]
    fn test_serializes_as_object() {
        let value = serde_json::to_value(Catalog::companies()).expect("catalog serializes");

        let object = value.as_object().expect("catalog is a JSON object");

        assert_eq!(object.len(), Catalog::companies().len());
        assert_eq!(object["AAPL"], "Apple Inc.");
        assert_eq!(object["BRK-B"], "Berkshire Hathaway Inc.");
        assert_eq!(object["RELIANCE.NS"], "Reliance Industries (India)");
        assert_eq!(object["TSLA"], "Tesla Inc.");
        assert_eq!(object["JNJ"], "Johnson & Johnson");
        assert!(object.get("ZZZZNOTREAL").is_none());
    }

    #[test]
    fn test_serializes_in_table_order() {
        let value = serde_json::to_value(Catalog::companies()).expect("catalog serializes");

        let keys: Vec<&str> = value
            .as_object()
            .expect("catalog is a JSON object")
            .keys()
            .map(String::as_str)
            .collect();

        let symbols: Vec<&str> = COMPANIES.iter().map(|(symbol, _)| *symbol).collect();

        assert_eq!(keys, symbols);
    }
}
