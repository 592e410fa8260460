//! Projection of a [`UserSnapshot`] into the exported JSON document.
//!
//! Items keep every original field with their `accounts` replaced by a
//! projected subset; transactions are projected to a fixed field set; the
//! token becomes a `{value, expires_at}` block.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::accounts::Account;
use crate::transactions::Transaction;

use super::UserSnapshot;

#[derive(Serialize)]
struct ExportToken<'a> {
    value: &'a str,
    expires_at: &'a DateTime<Utc>,
}

#[derive(Serialize)]
struct ExportAccount<'a> {
    id: i64,
    name: Option<&'a str>,
    balance: Option<f64>,
    status: Option<i64>,
    status_code_info: Option<&'a str>,
    status_code_description: Option<&'a str>,
    updated_at: Option<&'a str>,
    #[serde(rename = "type")]
    account_type: Option<&'a str>,
    currency_code: Option<&'a str>,
    iban: Option<&'a str>,
}

impl<'a> From<&'a Account> for ExportAccount<'a> {
    fn from(account: &'a Account) -> Self {
        Self {
            id: account.id,
            name: account.name.as_deref(),
            balance: account.balance,
            status: account.status,
            status_code_info: account.status_code_info.as_deref(),
            status_code_description: account.status_code_description.as_deref(),
            updated_at: account.updated_at.as_deref(),
            account_type: account.account_type.as_deref(),
            currency_code: account.currency_code.as_deref(),
            iban: account.iban.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct ExportTransaction<'a> {
    id: i64,
    clean_description: Option<&'a str>,
    bank_description: Option<&'a str>,
    amount: Option<f64>,
    date: Option<chrono::NaiveDate>,
    updated_at: Option<&'a str>,
    currency_code: Option<&'a str>,
    is_deleted: Option<bool>,
    category_id: Option<i64>,
    account_id: Option<i64>,
    is_future: Option<bool>,
    show_client_side: Option<bool>,
}

impl<'a> From<&'a Transaction> for ExportTransaction<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            id: tx.id,
            clean_description: tx.clean_description.as_deref(),
            bank_description: tx.bank_description.as_deref(),
            amount: tx.amount,
            date: tx.date,
            updated_at: tx.updated_at.as_deref(),
            currency_code: tx.currency_code.as_deref(),
            is_deleted: tx.is_deleted,
            category_id: tx.category_id,
            account_id: tx.account_id,
            is_future: tx.is_future,
            show_client_side: tx.show_client_side,
        }
    }
}

pub(super) fn format(snapshot: &UserSnapshot) -> Result<Value, crate::core::BridgeError> {
    let access_token = serde_json::to_value(ExportToken {
        value: &snapshot.token.access_token,
        expires_at: &snapshot.token.expires_at,
    })?;

    let mut items = Vec::with_capacity(snapshot.items.len());
    for entry in &snapshot.items {
        // Start from the item's own fields so nothing the API sent is lost.
        let mut item = serde_json::to_value(&entry.item)?;
        let accounts: Vec<ExportAccount<'_>> =
            entry.accounts.iter().map(ExportAccount::from).collect();
        item["accounts"] = serde_json::to_value(accounts)?;
        items.push(item);
    }

    let transactions: Vec<ExportTransaction<'_>> = snapshot
        .transactions
        .iter()
        .map(ExportTransaction::from)
        .collect();

    Ok(serde_json::json!({
        "access_token": access_token,
        "items": items,
        "transactions": transactions,
    }))
}
