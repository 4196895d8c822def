use crate::{
    errors::ServiceError,
    models::commission_level_model::CommissionLevel,
    repositories::commission_level_repository::CommissionLevelRepository,
    types::{
        models::booking::booking_channel::BookingChannel,
        requests::commission::{
            commission_level_request::{
                CreateCommissionLevelRequest, UpdateCommissionLevelRequest,
            },
            preview_query::PreviewQuery,
        },
    },
    utils::{auth_utils::Actor, commission_utils::commission_amount,
        validation_utils::parse_object_id},
};
use bson::oid::ObjectId;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionPreview {
    pub price: f64,
    pub rate: f64,
    pub amount: f64,
}

fn validate_rate(rate: f64, field: &str) -> Result<(), ServiceError> {
    if !(0.0..=100.0).contains(&rate) {
        return Err(ServiceError::validation(format!(
            "{} must be between 0 and 100",
            field
        )));
    }
    Ok(())
}

pub struct CommissionService {
    pub commission_level_repository: Arc<CommissionLevelRepository>,
}

impl CommissionService {
    pub fn new(commission_level_repository: Arc<CommissionLevelRepository>) -> Self {
        Self {
            commission_level_repository,
        }
    }

    pub async fn create_level(
        &self,
        actor: &Actor,
        data: CreateCommissionLevelRequest,
    ) -> Result<CommissionLevel, ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::forbidden(
                "Only administrators manage commission levels",
            ));
        }

        validate_rate(data.online_rate, "Online rate")?;
        validate_rate(data.direct_rate, "Direct rate")?;

        if data.is_default {
            self.commission_level_repository.clear_default_flags().await?;
        }

        let now = Utc::now();
        let level = CommissionLevel {
            id: Some(ObjectId::new()),
            name: data.name,
            online_rate: data.online_rate,
            direct_rate: data.direct_rate,
            is_default: data.is_default,
            is_premium: data.is_premium,
            created_at: now,
            updated_at: now,
        };

        Ok(self.commission_level_repository.create(&level).await?)
    }

    pub async fn list_levels(&self) -> Result<Vec<CommissionLevel>, ServiceError> {
        Ok(self.commission_level_repository.list_all().await?)
    }

    pub async fn update_level(
        &self,
        actor: &Actor,
        id: &str,
        update: UpdateCommissionLevelRequest,
    ) -> Result<CommissionLevel, ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::forbidden(
                "Only administrators manage commission levels",
            ));
        }

        if let Some(rate) = update.online_rate {
            validate_rate(rate, "Online rate")?;
        }
        if let Some(rate) = update.direct_rate {
            validate_rate(rate, "Direct rate")?;
        }

        let level_id = parse_object_id(id, "commission level")?;
        self.commission_level_repository
            .find_by_id(level_id)
            .await?
            .ok_or(ServiceError::NotFound("Commission level"))?;

        if update.is_default == Some(true) {
            self.commission_level_repository.clear_default_flags().await?;
        }

        self.commission_level_repository
            .update(level_id, &update)
            .await?;
        self.commission_level_repository
            .find_by_id(level_id)
            .await?
            .ok_or(ServiceError::NotFound("Commission level"))
    }

    pub async fn delete_level(&self, actor: &Actor, id: &str) -> Result<(), ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::forbidden(
                "Only administrators manage commission levels",
            ));
        }

        let level_id = parse_object_id(id, "commission level")?;
        self.commission_level_repository
            .find_by_id(level_id)
            .await?
            .ok_or(ServiceError::NotFound("Commission level"))?;

        self.commission_level_repository.delete_by_id(level_id).await?;
        Ok(())
    }

    /// Display-hint endpoint for the client; the same computation runs when a
    /// booking is persisted.
    pub async fn preview(&self, query: PreviewQuery) -> Result<CommissionPreview, ServiceError> {
        if query.price < 0.0 {
            return Err(ServiceError::validation("Price must be non-negative"));
        }

        let rate = match (&query.level, query.rate) {
            (Some(level_id), _) => {
                let level = self
                    .commission_level_repository
                    .find_by_id(parse_object_id(level_id, "commission level")?)
                    .await?
                    .ok_or(ServiceError::NotFound("Commission level"))?;
                match query.channel.unwrap_or(BookingChannel::Online) {
                    BookingChannel::Online => level.online_rate,
                    BookingChannel::Direct => level.direct_rate,
                }
            }
            (None, Some(rate)) => rate,
            (None, None) => {
                return Err(ServiceError::validation(
                    "Either a rate or a commission level is required",
                ));
            }
        };
        validate_rate(rate, "Rate")?;

        Ok(CommissionPreview {
            price: query.price,
            rate,
            amount: commission_amount(query.price, rate),
        })
    }
}
