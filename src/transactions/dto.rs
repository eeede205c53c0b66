use serde::Deserialize;
use sqlx::types::Decimal;
use time::OffsetDateTime;

use crate::transactions::repo_types::TransactionType;

/// Request body for creating a transaction. `date` defaults to now. Every
/// field deserializes leniently so missing input reaches handler validation
/// and answers 400 rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionType>,
    #[serde(default)]
    pub category: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}

/// Request body for replacing a transaction's mutable fields.
/// An omitted `date` keeps the stored one.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionType>,
    #[serde(default)]
    pub category: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_date_is_optional() {
        let req: CreateTransactionRequest = serde_json::from_str(
            r#"{"name": "Salary", "amount": "1000", "type": "income", "category": "Work"}"#,
        )
        .unwrap();
        assert!(req.date.is_none());
        assert_eq!(req.kind, Some(TransactionType::Income));
    }

    #[test]
    fn create_request_parses_rfc3339_date() {
        let req: CreateTransactionRequest = serde_json::from_str(
            r#"{"name": "Rent", "amount": "800.50", "type": "expense",
                "category": "Housing", "date": "2026-01-15T00:00:00Z"}"#,
        )
        .unwrap();
        let date = req.date.expect("date should parse");
        assert_eq!(date.year(), 2026);
    }

    #[test]
    fn create_request_rejects_unknown_type() {
        let result = serde_json::from_str::<CreateTransactionRequest>(
            r#"{"name": "x", "amount": "1", "type": "transfer", "category": "y"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_amount_and_type_deserialize_as_none() {
        // Missing fields must survive deserialization so the handler can
        // answer 400, not a 422 extractor rejection.
        let req: CreateTransactionRequest =
            serde_json::from_str(r#"{"name": "x", "category": "y"}"#).unwrap();
        assert!(req.amount.is_none());
        assert!(req.kind.is_none());

        let req: UpdateTransactionRequest =
            serde_json::from_str(r#"{"name": "x", "category": "y"}"#).unwrap();
        assert!(req.amount.is_none());
        assert!(req.kind.is_none());
    }
}
