//! Repositorio de empresas

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::company::Company;
use crate::utils::codes::generate_verify_code;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::pagination::PageParams;

const VERIFY_CODE_ATTEMPTS: usize = 5;

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una empresa con un código de verificación recién generado
    ///
    /// El código es único; ante una colisión se reintenta con otro código.
    pub async fn create(
        &self,
        name: String,
        tel: String,
        phone: String,
        email: String,
        address: String,
    ) -> AppResult<Company> {
        for _ in 0..VERIFY_CODE_ATTEMPTS {
            let result = sqlx::query_as::<_, Company>(
                r#"
                INSERT INTO companies (id, name, tel, phone, email, address, verify_code, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&name)
            .bind(&tel)
            .bind(&phone)
            .bind(&email)
            .bind(&address)
            .bind(generate_verify_code())
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await;

            match result {
                Ok(company) => return Ok(company),
                Err(e) if is_unique_violation(&e) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::Internal(
            "No se pudo generar un código de verificación único".to_string(),
        ))
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(company)
    }

    pub async fn find_by_verify_code(&self, verify_code: &str) -> AppResult<Option<Company>> {
        let company =
            sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE verify_code = $1")
                .bind(verify_code)
                .fetch_optional(&self.pool)
                .await?;

        Ok(company)
    }

    pub async fn list(&self, params: PageParams) -> AppResult<(Vec<Company>, i64)> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT * FROM companies ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await?;

        Ok((companies, total))
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
