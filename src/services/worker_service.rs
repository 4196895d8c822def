use crate::{
    errors::ServiceError,
    models::{user_model::User, worker_model::Worker},
    repositories::{
        property_repository::PropertyRepository, user_repository::UserRepository,
        worker_repository::WorkerRepository,
    },
    types::{
        models::{
            user::{defaults::default_status, role::Role},
            worker::{privileges::WorkerPrivileges, worker_status::default_worker_status},
        },
        requests::worker::{
            create_account_request::CreateAccountRequest,
            create_worker_request::CreateWorkerRequest,
            reset_password_request::ResetPasswordRequest,
            update_privileges_request::UpdatePrivilegesRequest,
            update_worker_request::UpdateWorkerRequest,
        },
        responses::worker_responses::WorkerAccountResponse,
    },
    utils::{
        auth_utils::{Actor, hash_password, worker_scope},
        validation_utils::parse_object_id,
    },
    validations::password::validate_password,
};
use anyhow::anyhow;
use bson::oid::ObjectId;
use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};
use std::sync::Arc;

const TEMP_PASSWORD_LENGTH: usize = 12;

fn generate_temp_password(rng: &mut impl Rng) -> String {
    loop {
        let candidate: String = (0..TEMP_PASSWORD_LENGTH)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect();
        if validate_password(&candidate).is_ok() {
            return candidate;
        }
    }
}

pub struct WorkerService {
    pub worker_repository: Arc<WorkerRepository>,
    pub user_repository: Arc<UserRepository>,
    pub property_repository: Arc<PropertyRepository>,
}

impl WorkerService {
    pub fn new(
        worker_repository: Arc<WorkerRepository>,
        user_repository: Arc<UserRepository>,
        property_repository: Arc<PropertyRepository>,
    ) -> Self {
        Self {
            worker_repository,
            user_repository,
            property_repository,
        }
    }

    pub async fn create_worker(
        &self,
        actor: &Actor,
        data: CreateWorkerRequest,
    ) -> Result<Worker, ServiceError> {
        if !matches!(actor.role, Role::Owner | Role::Admin) {
            return Err(ServiceError::forbidden("Only owners can add workers"));
        }

        if data.salary < 0.0 {
            return Err(ServiceError::validation("Salary must be non-negative"));
        }

        let mut assigned_property_ids = Vec::with_capacity(data.assigned_property_ids.len());
        for id in &data.assigned_property_ids {
            assigned_property_ids.push(parse_object_id(id, "property")?);
        }

        let privileges = WorkerPrivileges::default().apply(&data.privileges);

        let now = Utc::now();
        let worker = Worker {
            id: Some(ObjectId::new()),
            owner_id: actor.id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            national_id: data.national_id,
            position: data.position,
            department: data.department,
            salary: data.salary,
            privileges,
            assigned_property_ids,
            status: default_worker_status(),
            avatar: data.avatar,
            account_user_id: None,
            created_at: now,
            updated_at: now,
        };

        Ok(self.worker_repository.create(&worker).await?)
    }

    pub async fn list_workers(&self, actor: &Actor) -> Result<Vec<Worker>, ServiceError> {
        match worker_scope(actor, &self.worker_repository, |p| p.can_view_workers).await? {
            None => Ok(self.worker_repository.list_all().await?),
            Some(owner_id) => Ok(self.worker_repository.list_by_owner(owner_id).await?),
        }
    }

    pub async fn get_worker(&self, actor: &Actor, id: &str) -> Result<Worker, ServiceError> {
        let (_, worker) = self.find_worker(id).await?;

        let scope = worker_scope(actor, &self.worker_repository, |p| p.can_view_workers).await?;
        if let Some(owner_id) = scope {
            if worker.owner_id != owner_id {
                return Err(ServiceError::forbidden(
                    "This worker belongs to another owner",
                ));
            }
        }

        Ok(worker)
    }

    pub async fn update_worker(
        &self,
        actor: &Actor,
        id: &str,
        update: UpdateWorkerRequest,
    ) -> Result<Worker, ServiceError> {
        let (worker_id, _) = self.owned_worker(actor, id).await?;

        if let Some(salary) = update.salary {
            if salary < 0.0 {
                return Err(ServiceError::validation("Salary must be non-negative"));
            }
        }

        self.worker_repository.update(worker_id, &update).await?;
        self.worker_repository
            .find_by_id(worker_id)
            .await?
            .ok_or(ServiceError::NotFound("Worker"))
    }

    /// Partial merge: supplied keys override, unspecified keys keep their
    /// stored value.
    pub async fn update_privileges(
        &self,
        actor: &Actor,
        id: &str,
        data: UpdatePrivilegesRequest,
    ) -> Result<Worker, ServiceError> {
        let (worker_id, worker) = self.owned_worker(actor, id).await?;

        let merged = worker.privileges.apply(&data.privileges);
        self.worker_repository
            .set_privileges(worker_id, &merged)
            .await?;

        self.worker_repository
            .find_by_id(worker_id)
            .await?
            .ok_or(ServiceError::NotFound("Worker"))
    }

    pub async fn create_account(
        &self,
        actor: &Actor,
        id: &str,
        data: CreateAccountRequest,
    ) -> Result<WorkerAccountResponse, ServiceError> {
        let (worker_id, worker) = self.owned_worker(actor, id).await?;

        if worker.account_user_id.is_some() {
            return Err(ServiceError::conflict(
                "This worker already has a login account",
            ));
        }

        validate_password(&data.password).map_err(|e| {
            ServiceError::validation(
                e.message
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid password".to_string()),
            )
        })?;

        let email = data.email.unwrap_or_else(|| worker.email.clone());
        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(ServiceError::conflict(format!(
                "An account with email '{}' already exists",
                email
            )));
        }

        let hashed_password = hash_password(&data.password)
            .map_err(|e| ServiceError::Internal(anyhow!("Password hashing failed: {}", e)))?;

        let account_user_id = ObjectId::new();
        let now = Utc::now();
        let account = User {
            id: Some(account_user_id),
            name: worker.name.clone(),
            email: email.clone(),
            password: hashed_password,
            phone: Some(worker.phone.clone()),
            role: Role::Worker,
            status: default_status(),
            worker_id: Some(worker_id),
            created_at: now,
            updated_at: now,
        };
        self.user_repository.create(&account).await?;

        self.worker_repository
            .set_account_user_id(worker_id, account_user_id)
            .await?;

        Ok(WorkerAccountResponse {
            email,
            temporary_password: None,
        })
    }

    pub async fn reset_password(
        &self,
        actor: &Actor,
        id: &str,
        data: ResetPasswordRequest,
    ) -> Result<WorkerAccountResponse, ServiceError> {
        let (_, worker) = self.owned_worker(actor, id).await?;

        let account_user_id = worker
            .account_user_id
            .ok_or_else(|| ServiceError::validation("This worker has no login account"))?;
        let account = self
            .user_repository
            .find_by_id(account_user_id)
            .await?
            .ok_or(ServiceError::NotFound("Worker account"))?;

        let (password, temporary_password) = match data.password {
            Some(password) => (password, None),
            None => {
                let generated = generate_temp_password(&mut rand::thread_rng());
                (generated.clone(), Some(generated))
            }
        };

        validate_password(&password).map_err(|e| {
            ServiceError::validation(
                e.message
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid password".to_string()),
            )
        })?;

        let hashed_password = hash_password(&password)
            .map_err(|e| ServiceError::Internal(anyhow!("Password hashing failed: {}", e)))?;
        self.user_repository
            .set_password(account_user_id, &hashed_password)
            .await?;

        Ok(WorkerAccountResponse {
            email: account.email,
            temporary_password,
        })
    }

    /// Hard delete plus cascade: the login account goes away and the worker
    /// is pulled from every property assignment list.
    pub async fn delete_worker(&self, actor: &Actor, id: &str) -> Result<(), ServiceError> {
        let (worker_id, worker) = self.owned_worker(actor, id).await?;

        if let Some(account_user_id) = worker.account_user_id {
            self.user_repository.delete_by_id(account_user_id).await?;
        }
        self.property_repository
            .pull_worker_assignments(worker_id)
            .await?;
        self.worker_repository.delete_by_id(worker_id).await?;

        Ok(())
    }

    async fn find_worker(&self, id: &str) -> Result<(ObjectId, Worker), ServiceError> {
        let worker_id = parse_object_id(id, "worker")?;
        let worker = self
            .worker_repository
            .find_by_id(worker_id)
            .await?
            .ok_or(ServiceError::NotFound("Worker"))?;
        Ok((worker_id, worker))
    }

    /// Management operations are owner-or-admin only.
    async fn owned_worker(&self, actor: &Actor, id: &str) -> Result<(ObjectId, Worker), ServiceError> {
        let (worker_id, worker) = self.find_worker(id).await?;

        if !actor.is_admin() && worker.owner_id != actor.id {
            return Err(ServiceError::forbidden(
                "This worker belongs to another owner",
            ));
        }

        Ok((worker_id, worker))
    }
}
