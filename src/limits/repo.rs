use sqlx::PgPool;
use uuid::Uuid;

/// Per-user expense limits: one row per user holding an opaque
/// category-to-amount mapping as JSONB.
pub struct ExpenseLimits;

impl ExpenseLimits {
    pub async fn get(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<serde_json::Value>, sqlx::Error> {
        sqlx::query_scalar::<_, serde_json::Value>(
            r#"
            SELECT limits
            FROM expense_limits
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Create-or-replace: an existing mapping is fully overwritten, not
    /// merged.
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        limits: &serde_json::Value,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO expense_limits (user_id, limits)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET limits = EXCLUDED.limits
            "#,
        )
        .bind(user_id)
        .bind(limits)
        .execute(db)
        .await?;
        Ok(())
    }
}
