//! Controlador de vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::vehicle_model_repository::VehicleModelRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::availability_service::AvailabilityWindow;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppResult};
use crate::utils::pagination::{PageParams, Paginated};

pub struct VehicleController {
    repository: VehicleRepository,
    models: VehicleModelRepository,
    companies: CompanyRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            models: VehicleModelRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<VehicleResponse> {
        request.validate()?;

        // Las referencias deben existir
        if self.companies.find_by_id(request.company_id).await?.is_none() {
            return Err(validation_error("company_id", "unknown company"));
        }
        if self.models.find_by_id(request.model_id).await?.is_none() {
            return Err(validation_error("model_id", "unknown vehicle model"));
        }

        if let Some(field) = self
            .repository
            .find_conflicting_identifier(
                &request.eng_no,
                &request.chassis_no,
                &request.traffic_plate_no,
                &request.policy_no,
            )
            .await?
        {
            let value = match field {
                "eng_no" => &request.eng_no,
                "chassis_no" => &request.chassis_no,
                "traffic_plate_no" => &request.traffic_plate_no,
                _ => &request.policy_no,
            };
            return Err(conflict_error("Vehicle", field, value));
        }

        let vehicle = self.repository.create(request).await?;

        tracing::info!(
            "🚗 Vehículo registrado: {} ({})",
            vehicle.traffic_plate_no,
            vehicle.id
        );

        Ok(vehicle.into())
    }

    /// Listado público de vehículos, filtrable por disponibilidad
    pub async fn list(
        &self,
        filters: VehicleFilters,
        window: Option<AvailabilityWindow>,
        params: PageParams,
    ) -> AppResult<Paginated<VehicleResponse>> {
        let (vehicles, total) = self.repository.list(filters, window, params).await?;

        Ok(Paginated::new(
            vehicles.into_iter().map(VehicleResponse::from).collect(),
            total,
            params,
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(vehicle.into())
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> AppResult<VehicleResponse> {
        request.validate()?;

        if let Some(model_id) = request.model_id {
            if self.models.find_by_id(model_id).await?.is_none() {
                return Err(validation_error("model_id", "unknown vehicle model"));
            }
        }

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        let vehicle = self.repository.update(&current, request).await?;

        Ok(vehicle.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        self.repository.delete(id).await?;

        Ok(())
    }
}
