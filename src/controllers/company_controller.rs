//! Controlador de empresas
//!
//! Alta y listado, solo para administradores. El código de verificación
//! que se devuelve es el que el staff de la empresa usa para registrarse.

use sqlx::PgPool;
use validator::Validate;

use crate::models::company::{CompanyResponse, CreateCompanyRequest};
use crate::repositories::company_repository::CompanyRepository;
use crate::utils::errors::AppResult;
use crate::utils::pagination::{PageParams, Paginated};

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCompanyRequest) -> AppResult<CompanyResponse> {
        request.validate()?;

        let company = self
            .repository
            .create(
                request.name,
                request.tel,
                request.phone,
                request.email,
                request.address,
            )
            .await?;

        tracing::info!("🏢 Empresa creada: {} ({})", company.name, company.id);

        Ok(company.into())
    }

    pub async fn list(&self, params: PageParams) -> AppResult<Paginated<CompanyResponse>> {
        let (companies, total) = self.repository.list(params).await?;

        Ok(Paginated::new(
            companies.into_iter().map(CompanyResponse::from).collect(),
            total,
            params,
        ))
    }
}
