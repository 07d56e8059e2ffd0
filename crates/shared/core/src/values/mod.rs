use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Quote-currency unit price - uses Decimal for precision
pub type Price = Decimal;

/// Amount of the base asset (crypto) - uses Decimal for precision
pub type Quantity = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Identifier of an exchange, unique within one planning call
pub type ExchangeId = String;

/// Unique identifier for a resting order-book entry
pub type OrderId = Uuid;
