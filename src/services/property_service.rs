use crate::{
    errors::ServiceError,
    models::property_model::Property,
    repositories::{property_repository::PropertyRepository, worker_repository::WorkerRepository},
    types::{
        models::{listing::property_status::default_property_status, user::role::Role},
        requests::property::{
            create_property_request::CreatePropertyRequest,
            update_property_request::UpdatePropertyRequest,
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

pub struct PropertyService {
    pub property_repository: Arc<PropertyRepository>,
    pub worker_repository: Arc<WorkerRepository>,
}

impl PropertyService {
    pub fn new(
        property_repository: Arc<PropertyRepository>,
        worker_repository: Arc<WorkerRepository>,
    ) -> Self {
        Self {
            property_repository,
            worker_repository,
        }
    }

    pub async fn create_property(
        &self,
        actor: &Actor,
        data: CreatePropertyRequest,
    ) -> Result<Property, ServiceError> {
        if !matches!(actor.role, Role::Owner | Role::Admin) {
            return Err(ServiceError::forbidden("Only owners can list properties"));
        }

        if data.nightly_rate < 0.0 {
            return Err(ServiceError::validation(
                "Nightly rate must be non-negative",
            ));
        }

        let commission_level_id = match &data.commission_level {
            Some(id) => Some(parse_object_id(id, "commission level")?),
            None => None,
        };

        let now = Utc::now();
        let property = Property {
            id: Some(ObjectId::new()),
            owner_id: actor.id,
            title: data.title,
            city: data.city,
            address: data.address,
            nightly_rate: data.nightly_rate,
            capacity: data.capacity,
            status: default_property_status(),
            commission_level_id,
            assigned_worker_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        Ok(self.property_repository.create(&property).await?)
    }

    pub async fn list_properties(&self, actor: &Actor) -> Result<Vec<Property>, ServiceError> {
        match worker_scope(actor, &self.worker_repository, |p| p.can_view_properties).await? {
            None => Ok(self.property_repository.list_all().await?),
            Some(owner_id) => Ok(self.property_repository.list_by_owner(owner_id).await?),
        }
    }

    pub async fn get_property(&self, actor: &Actor, id: &str) -> Result<Property, ServiceError> {
        let (_, property) = self.find_property(id).await?;

        let scope = worker_scope(actor, &self.worker_repository, |p| p.can_view_properties).await?;
        if let Some(owner_id) = scope {
            if property.owner_id != owner_id {
                return Err(ServiceError::forbidden(
                    "This property belongs to another owner",
                ));
            }
        }

        Ok(property)
    }

    pub async fn update_property(
        &self,
        actor: &Actor,
        id: &str,
        update: UpdatePropertyRequest,
    ) -> Result<Property, ServiceError> {
        let (property_id, property) = self.find_property(id).await?;

        let scope = worker_scope(actor, &self.worker_repository, |p| p.can_edit_properties).await?;
        if let Some(owner_id) = scope {
            if property.owner_id != owner_id {
                return Err(ServiceError::forbidden(
                    "This property belongs to another owner",
                ));
            }
        }

        if let Some(rate) = update.nightly_rate {
            if rate < 0.0 {
                return Err(ServiceError::validation(
                    "Nightly rate must be non-negative",
                ));
            }
        }

        self.property_repository.update(property_id, &update).await?;
        self.property_repository
            .find_by_id(property_id)
            .await?
            .ok_or(ServiceError::NotFound("Property"))
    }

    pub async fn delete_property(&self, actor: &Actor, id: &str) -> Result<(), ServiceError> {
        let (property_id, property) = self.find_property(id).await?;

        if !actor.is_admin() && property.owner_id != actor.id {
            return Err(ServiceError::forbidden(
                "This property belongs to another owner",
            ));
        }

        self.property_repository.delete_by_id(property_id).await?;
        Ok(())
    }

    async fn find_property(&self, id: &str) -> Result<(ObjectId, Property), ServiceError> {
        let property_id = parse_object_id(id, "property")?;
        let property = self
            .property_repository
            .find_by_id(property_id)
            .await?
            .ok_or(ServiceError::NotFound("Property"))?;
        Ok((property_id, property))
    }
}
