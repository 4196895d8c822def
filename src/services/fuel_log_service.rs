use crate::{
    errors::ServiceError,
    models::fuel_log_model::FuelLog,
    repositories::{
        car_repository::CarRepository, fuel_log_repository::FuelLogRepository,
        worker_repository::WorkerRepository,
    },
    types::{
        requests::fuel_log::{
            create_fuel_log_request::CreateFuelLogRequest, fuel_log_query::FuelLogQuery,
        },
        responses::fuel_log_responses::{FuelLogListResponse, FuelLogWithCar},
    },
    utils::{
        analytics_utils::fuel_summary,
        auth_utils::{Actor, worker_scope},
        date_utils::{day_start, next_day_start},
        validation_utils::parse_object_id,
    },
};
use bson::{Document, oid::ObjectId, to_bson};
use chrono::Utc;
use std::sync::Arc;

pub struct FuelLogService {
    pub fuel_log_repository: Arc<FuelLogRepository>,
    pub car_repository: Arc<CarRepository>,
    pub worker_repository: Arc<WorkerRepository>,
}

impl FuelLogService {
    pub fn new(
        fuel_log_repository: Arc<FuelLogRepository>,
        car_repository: Arc<CarRepository>,
        worker_repository: Arc<WorkerRepository>,
    ) -> Self {
        Self {
            fuel_log_repository,
            car_repository,
            worker_repository,
        }
    }

    /// Owner-scoped listing with optional car and date-range filters. The
    /// summary is folded over exactly the logs being returned.
    pub async fn list_logs(
        &self,
        actor: &Actor,
        query: FuelLogQuery,
    ) -> Result<FuelLogListResponse, ServiceError> {
        let scope = worker_scope(actor, &self.worker_repository, |p| p.can_view_fuel_logs).await?;

        let mut filter = Document::new();
        match (&scope, &query.owner) {
            (None, Some(owner)) => {
                filter.insert("ownerId", parse_object_id(owner, "owner")?);
            }
            (None, None) => {}
            (Some(owner_id), _) => {
                filter.insert("ownerId", *owner_id);
            }
        }

        if let Some(car) = &query.car {
            filter.insert("carId", parse_object_id(car, "car")?);
        }

        let mut date_filter = Document::new();
        if let Some(from) = query.from {
            date_filter.insert("$gte", to_bson(&day_start(from))?);
        }
        if let Some(to) = query.to {
            date_filter.insert("$lt", to_bson(&next_day_start(to))?);
        }
        if !date_filter.is_empty() {
            filter.insert("date", date_filter);
        }

        let logs = self.fuel_log_repository.list(filter).await?;
        let summary = fuel_summary(&logs);

        Ok(FuelLogListResponse { logs, summary })
    }

    pub async fn create_log(
        &self,
        actor: &Actor,
        data: CreateFuelLogRequest,
    ) -> Result<FuelLogWithCar, ServiceError> {
        if data.liters < 0.0 || data.total_cost < 0.0 {
            return Err(ServiceError::validation(
                "Liters and total cost must be non-negative",
            ));
        }

        let scope = worker_scope(actor, &self.worker_repository, |p| p.can_add_fuel_logs).await?;

        let car_id = parse_object_id(&data.car, "car")?;
        let car = self
            .car_repository
            .find_by_id(car_id)
            .await?
            .ok_or(ServiceError::NotFound("Car"))?;

        if let Some(owner_id) = scope {
            if car.owner_id != owner_id {
                return Err(ServiceError::forbidden(
                    "You can only add fuel logs for your own cars",
                ));
            }
        }

        let now = Utc::now();
        let log = FuelLog {
            id: Some(ObjectId::new()),
            owner_id: car.owner_id,
            car_id,
            date: day_start(data.date),
            liters: data.liters,
            total_cost: data.total_cost,
            price_per_liter: data.price_per_liter,
            odometer: data.odometer,
            station: data.station,
            note: data.note,
            created_at: now,
            updated_at: now,
        };

        let log = self.fuel_log_repository.create(&log).await?;
        Ok(FuelLogWithCar { log, car })
    }

    pub async fn delete_log(&self, actor: &Actor, id: &str) -> Result<(), ServiceError> {
        let log_id = parse_object_id(id, "fuel log")?;
        let log = self
            .fuel_log_repository
            .find_by_id(log_id)
            .await?
            .ok_or(ServiceError::NotFound("Fuel log"))?;

        let scope = worker_scope(actor, &self.worker_repository, |p| p.can_add_fuel_logs).await?;
        if let Some(owner_id) = scope {
            if log.owner_id != owner_id {
                return Err(ServiceError::forbidden(
                    "You can only delete your own fuel logs",
                ));
            }
        }

        self.fuel_log_repository.delete_by_id(log_id).await?;
        Ok(())
    }
}
