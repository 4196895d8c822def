use crate::{
    errors::ServiceError,
    models::car_model::Car,
    repositories::{car_repository::CarRepository, worker_repository::WorkerRepository},
    types::{
        models::{listing::car_status::default_car_status, user::role::Role},
        requests::car::{
            create_car_request::CreateCarRequest, update_car_request::UpdateCarRequest,
        },
    },
    utils::{
        auth_utils::{Actor, worker_scope},
        validation_utils::parse_object_id,
    },
};
use bson::oid::ObjectId;
use chrono::Utc;
use std::sync::Arc;

pub struct CarService {
    pub car_repository: Arc<CarRepository>,
    pub worker_repository: Arc<WorkerRepository>,
}

impl CarService {
    pub fn new(car_repository: Arc<CarRepository>, worker_repository: Arc<WorkerRepository>) -> Self {
        Self {
            car_repository,
            worker_repository,
        }
    }

    pub async fn create_car(&self, actor: &Actor, data: CreateCarRequest) -> Result<Car, ServiceError> {
        if !matches!(actor.role, Role::Owner | Role::Admin) {
            return Err(ServiceError::forbidden("Only owners can add cars"));
        }

        if data.daily_rate < 0.0 {
            return Err(ServiceError::validation("Daily rate must be non-negative"));
        }

        let commission_level_id = match &data.commission_level {
            Some(id) => Some(parse_object_id(id, "commission level")?),
            None => None,
        };

        let now = Utc::now();
        let car = Car {
            id: Some(ObjectId::new()),
            owner_id: actor.id,
            vehicle_name: data.vehicle_name,
            plate_number: data.plate_number,
            model: data.model,
            year: data.year,
            daily_rate: data.daily_rate,
            status: default_car_status(),
            commission_level_id,
            created_at: now,
            updated_at: now,
        };

        Ok(self.car_repository.create(&car).await?)
    }

    pub async fn list_cars(&self, actor: &Actor) -> Result<Vec<Car>, ServiceError> {
        match worker_scope(actor, &self.worker_repository, |p| p.can_view_cars).await? {
            None => Ok(self.car_repository.list_all().await?),
            Some(owner_id) => Ok(self.car_repository.list_by_owner(owner_id).await?),
        }
    }

    pub async fn get_car(&self, actor: &Actor, id: &str) -> Result<Car, ServiceError> {
        let (_, car) = self.find_car(id).await?;

        let scope = worker_scope(actor, &self.worker_repository, |p| p.can_view_cars).await?;
        if let Some(owner_id) = scope {
            if car.owner_id != owner_id {
                return Err(ServiceError::forbidden("This car belongs to another owner"));
            }
        }

        Ok(car)
    }

    pub async fn update_car(
        &self,
        actor: &Actor,
        id: &str,
        update: UpdateCarRequest,
    ) -> Result<Car, ServiceError> {
        let (car_id, car) = self.find_car(id).await?;

        let scope = worker_scope(actor, &self.worker_repository, |p| p.can_edit_cars).await?;
        if let Some(owner_id) = scope {
            if car.owner_id != owner_id {
                return Err(ServiceError::forbidden("This car belongs to another owner"));
            }
        }

        if let Some(rate) = update.daily_rate {
            if rate < 0.0 {
                return Err(ServiceError::validation("Daily rate must be non-negative"));
            }
        }

        self.car_repository.update(car_id, &update).await?;
        self.car_repository
            .find_by_id(car_id)
            .await?
            .ok_or(ServiceError::NotFound("Car"))
    }

    pub async fn delete_car(&self, actor: &Actor, id: &str) -> Result<(), ServiceError> {
        let (car_id, car) = self.find_car(id).await?;

        if !actor.is_admin() && car.owner_id != actor.id {
            return Err(ServiceError::forbidden("This car belongs to another owner"));
        }

        self.car_repository.delete_by_id(car_id).await?;
        Ok(())
    }

    async fn find_car(&self, id: &str) -> Result<(ObjectId, Car), ServiceError> {
        let car_id = parse_object_id(id, "car")?;
        let car = self
            .car_repository
            .find_by_id(car_id)
            .await?
            .ok_or(ServiceError::NotFound("Car"))?;
        Ok((car_id, car))
    }
}
