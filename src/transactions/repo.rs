use sqlx::{types::Decimal, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

pub use crate::transactions::repo_types::{Transaction, TransactionType};

impl Transaction {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        name: &str,
        amount: Decimal,
        kind: TransactionType,
        category: &str,
        date: Option<OffsetDateTime>,
    ) -> Result<Transaction, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (user_id, name, amount, "type", category, date)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, now()))
            RETURNING id, user_id, name, amount, "type", category, date
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(amount)
        .bind(kind)
        .bind(category)
        .bind(date)
        .fetch_one(db)
        .await
    }

    /// All transactions for one user, most recent first. The ordering is a
    /// user-facing guarantee.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<Transaction>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, name, amount, "type", category, date
            FROM transactions
            WHERE user_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Replace the mutable fields of a transaction. Returns `None` when the
    /// row does not exist or belongs to another user; the caller cannot tell
    /// the two apart.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        id: Uuid,
        name: &str,
        amount: Decimal,
        kind: TransactionType,
        category: &str,
        date: Option<OffsetDateTime>,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        sqlx::query_as::<_, Transaction>(
            r#"
            UPDATE transactions
            SET name = $3, amount = $4, "type" = $5, category = $6, date = COALESCE($7, date)
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, amount, "type", category, date
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .bind(amount)
        .bind(kind)
        .bind(category)
        .bind(date)
        .fetch_optional(db)
        .await
    }

    /// Delete a transaction, same ownership rule as `update`. Returns whether
    /// a row was removed.
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
