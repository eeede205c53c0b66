use serde::{Deserialize, Serialize};
use sqlx::{types::Decimal, FromRow};
use time::OffsetDateTime;
use uuid::Uuid;

/// Whether a transaction adds to or subtracts from the user's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Transaction record in the database. Owned by exactly one user; every
/// query that mutates a row also filters on `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            r#""income""#
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            r#""expense""#
        );
    }

    #[test]
    fn transaction_serializes_kind_as_type() {
        let t = Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Groceries".into(),
            amount: Decimal::new(4250, 2),
            kind: TransactionType::Expense,
            category: "Food".into(),
            date: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["type"], "expense");
        assert!(json.get("kind").is_none());
    }
}
