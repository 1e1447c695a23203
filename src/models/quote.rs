use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Latest traded price for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub price: Decimal,
    /// Provider timestamp of the bar the price was taken from.
    pub as_of: String,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ${} (as of {})", self.symbol, self.price, self.as_of)
    }
}
