//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.
//!
//! Expects an existing table:
//!
//! ```sql
//! CREATE TABLE users (
//!     id    BIGSERIAL PRIMARY KEY,
//!     name  TEXT NOT NULL,
//!     email TEXT NOT NULL,
//!     phone TEXT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{NewUser, StoreError, User, UserChanges, UserLookup, UserRepository};
use crate::infrastructure::metrics::time_store_operation;

const BACKEND: &str = "postgres";

/// Database row representation of the users table.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    phone: Option<String>,
}

impl UserRow {
    /// Convert database row to domain User entity.
    fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = time_store_operation(
            "list_all",
            self.backend(),
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, name, email, phone
                FROM users
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<UserLookup, StoreError> {
        let row = time_store_operation(
            "find_by_id",
            self.backend(),
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, name, email, phone
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.map(UserRow::into_user).into())
    }

    /// Required fields are checked before the insert so a missing one is
    /// reported by name rather than as a constraint violation.
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        user.check_required()?;

        let row = time_store_operation(
            "create",
            self.backend(),
            sqlx::query_as::<_, UserRow>(
                r#"
                INSERT INTO users (name, email, phone)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, phone
                "#,
            )
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.phone)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(row.into_user())
    }

    /// Absent fields keep their stored value through `COALESCE`.
    async fn update(&self, id: i64, changes: UserChanges) -> Result<User, StoreError> {
        let row = time_store_operation(
            "update",
            self.backend(),
            sqlx::query_as::<_, UserRow>(
                r#"
                UPDATE users
                SET name = COALESCE($2, name),
                    email = COALESCE($3, email),
                    phone = COALESCE($4, phone)
                WHERE id = $1
                RETURNING id, name, email, phone
                "#,
            )
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.email)
            .bind(&changes.phone)
            .fetch_optional(&self.pool),
        )
        .await?
        .ok_or(StoreError::NotFound(id))?;

        Ok(row.into_user())
    }

    /// Hard delete.
    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = time_store_operation(
            "delete",
            self.backend(),
            sqlx::query("DELETE FROM users WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        BACKEND
    }
}
