use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of an order: the caller's request, or a resting order's interest.
///
/// Persisted snapshots spell it `Buy`/`Sell`; lowercase and uppercase spellings
/// are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(alias = "buy", alias = "BUY")]
    Buy,
    #[serde(alias = "sell", alias = "SELL")]
    Sell,
}

impl Side {
    /// Label for the plan aggregate: what a buy costs, what a sell earns
    pub fn total_label(&self) -> &'static str {
        match self {
            Side::Buy => "Cost",
            Side::Sell => "Revenue",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

impl TryFrom<&str> for Side {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("invalid order type '{}': must be buy or sell", other)),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Side::try_from("BUY"), Ok(Side::Buy));
        assert_eq!(" sell ".parse::<Side>(), Ok(Side::Sell));
        assert!(Side::try_from("hold").is_err());
    }

    #[test]
    fn test_deserialize_aliases() {
        let side: Side = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(side, Side::Buy);
        let side: Side = serde_json::from_str("\"Sell\"").unwrap();
        assert_eq!(side, Side::Sell);
    }
}
