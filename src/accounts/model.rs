use serde::{Deserialize, Serialize};

/// A financial account belonging to one item.
///
/// The named fields are the ones the snapshot export projects; everything
/// else the API sends (loan details, savings details, pro flags...) is kept
/// in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Server-assigned account identifier.
    pub id: i64,
    /// Display name of the account.
    pub name: Option<String>,
    /// Current balance in the account's currency.
    pub balance: Option<f64>,
    /// Numeric refresh status of the account.
    pub status: Option<i64>,
    /// Short status code, when the bank reported one.
    pub status_code_info: Option<String>,
    /// Human-readable status description, when the bank reported one.
    pub status_code_description: Option<String>,
    /// Last refresh timestamp, passed through as the server sent it.
    pub updated_at: Option<String>,
    /// Account kind (checking, savings, loan...).
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    /// ISO 4217 currency code.
    pub currency_code: Option<String>,
    /// IBAN, when the bank exposes one.
    pub iban: Option<String>,
    /// The item this account belongs to.
    pub item_id: Option<i64>,
    /// Fields this client does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
