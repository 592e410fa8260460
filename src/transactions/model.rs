use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bank transaction.
///
/// Transactions are fetched globally for the authenticated user, not scoped
/// to an item or account; `account_id` is the server's own back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned transaction identifier.
    pub id: i64,
    /// Cleaned-up label.
    pub clean_description: Option<String>,
    /// Raw label as the bank reported it.
    pub bank_description: Option<String>,
    /// Signed amount in the account's currency.
    pub amount: Option<f64>,
    /// Booking date.
    pub date: Option<NaiveDate>,
    /// Last update timestamp, passed through as the server sent it.
    pub updated_at: Option<String>,
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,
    /// Whether the bank deleted this transaction.
    pub is_deleted: Option<bool>,
    /// Bridge category identifier.
    pub category_id: Option<i64>,
    /// The account this transaction was booked on.
    pub account_id: Option<i64>,
    /// Whether the transaction is scheduled but not yet booked.
    pub is_future: Option<bool>,
    /// Whether Bridge recommends displaying it to end users.
    pub show_client_side: Option<bool>,
    /// Fields this client does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
