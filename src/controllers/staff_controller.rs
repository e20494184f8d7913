//! Controlador de staff
//!
//! Registro con código de empresa, perfil propio, actualización con
//! campos reservados a admin, foto de perfil y los dos listados de
//! disponibilidad (staff general y staff especializado por modelo).

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::EnvironmentConfig;
use crate::models::staff::{
    SignupRequest, Staff, StaffFilters, StaffResponse, UpdateStaffRequest, UploadPhotoRequest,
};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::staff_repository::{NewStaff, StaffRepository};
use crate::services::availability_service::AvailabilityWindow;
use crate::services::media_service;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError, AppResult};
use crate::utils::pagination::{PageParams, Paginated};

pub struct StaffController {
    repository: StaffRepository,
    companies: CompanyRepository,
    config: EnvironmentConfig,
}

impl StaffController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: StaffRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool),
            config,
        }
    }

    /// Auto-registro de staff con el código de verificación de su empresa
    pub async fn signup(&self, request: SignupRequest) -> AppResult<StaffResponse> {
        request.validate()?;

        let company = self
            .companies
            .find_by_verify_code(&request.verify_code)
            .await?
            .ok_or_else(|| {
                validation_error("verify_code", "invalid company verify code")
            })?;

        if let Some(field) = self
            .repository
            .find_conflicting_field(&request.username, &request.name, &request.phone)
            .await?
        {
            let value = match field {
                "username" => &request.username,
                "name" => &request.name,
                _ => &request.phone,
            };
            return Err(conflict_error("Staff", field, value));
        }

        let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error generando hash: {}", e)))?;

        let staff = self
            .repository
            .create(NewStaff {
                company_id: company.id,
                username: request.username,
                password_hash,
                name: request.name,
                phone: request.phone,
                nickname: request.nickname,
                introduction: request.introduction.unwrap_or_default(),
                hour_pay: request.hour_pay.unwrap_or(Decimal::ZERO),
                driver: request.driver.unwrap_or(false),
                tourguide: request.tourguide.unwrap_or(false),
            })
            .await?;

        tracing::info!("👤 Staff registrado: {} ({})", staff.name, staff.id);

        Ok(staff.into())
    }

    /// Listado de disponibilidad
    ///
    /// `specialized = false`: staff sin especialización de modelo (el
    /// pool general). `specialized = true`: solo staff con modelo
    /// asignado, filtrable por ese modelo.
    pub async fn list_available(
        &self,
        filters: StaffFilters,
        specialized: bool,
        window: Option<AvailabilityWindow>,
        params: PageParams,
    ) -> AppResult<Paginated<StaffResponse>> {
        let (staff, total) = self
            .repository
            .list_available(filters, specialized, window, params)
            .await?;

        Ok(Paginated::new(
            staff.into_iter().map(StaffResponse::from).collect(),
            total,
            params,
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, requester: &Staff) -> AppResult<StaffResponse> {
        if !requester.is_admin && requester.id != id {
            return Err(AppError::Forbidden(
                "Solo puedes acceder a tu propio registro".to_string(),
            ));
        }

        let staff = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Staff", &id.to_string()))?;

        Ok(staff.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        requester: &Staff,
        request: UpdateStaffRequest,
    ) -> AppResult<StaffResponse> {
        request.validate()?;

        if !requester.is_admin {
            if requester.id != id {
                return Err(AppError::Forbidden(
                    "Solo puedes actualizar tu propio registro".to_string(),
                ));
            }
            if request.touches_admin_fields() {
                return Err(AppError::Forbidden(
                    "Campo reservado a administradores".to_string(),
                ));
            }
        }

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Staff", &id.to_string()))?;

        let staff = self.repository.update(&current, request).await?;

        Ok(staff.into())
    }

    /// Subir la foto de perfil del propio staff
    pub async fn upload_photo(
        &self,
        requester: &Staff,
        request: UploadPhotoRequest,
    ) -> AppResult<StaffResponse> {
        request.validate()?;

        let path = media_service::save_photo(&self.config, requester.id, &request).await?;
        let staff = self.repository.update_photo(requester.id, &path).await?;

        tracing::info!("📷 Foto actualizada para staff {}", staff.id);

        Ok(staff.into())
    }

    /// Deshabilitar un staff (nunca se borra físicamente)
    pub async fn disable(&self, id: Uuid) -> AppResult<StaffResponse> {
        // Verificar que existe antes de deshabilitar
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Staff", &id.to_string()))?;

        let staff = self.repository.disable(id).await?;

        Ok(staff.into())
    }
}
