use crate::constants::WORKER_COL_NAME;
use crate::{
    config::database::get_collection,
    models::worker_model::Worker,
    types::{
        models::worker::privileges::WorkerPrivileges,
        requests::worker::update_worker_request::UpdateWorkerRequest,
    },
};
use bson::oid::ObjectId;
use chrono::Utc;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, to_bson, to_document};
use mongodb::{Client, Collection, error::Result};

pub struct WorkerRepository {
    pub collection: Collection<Worker>,
}

impl WorkerRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*WORKER_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, worker: &Worker) -> Result<Worker> {
        self.collection.insert_one(worker).await?;
        Ok(worker.clone())
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Worker>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn find_by_account_user_id(&self, user_id: ObjectId) -> Result<Option<Worker>> {
        self.collection
            .find_one(doc! { "accountUserId": user_id })
            .await
    }

    pub async fn list_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Worker>> {
        let cursor = self.collection.find(doc! { "ownerId": owner_id }).await?;
        cursor.try_collect().await
    }

    pub async fn list_all(&self) -> Result<Vec<Worker>> {
        let cursor = self.collection.find(doc! {}).await?;
        cursor.try_collect().await
    }

    pub async fn update(&self, id: ObjectId, update: &UpdateWorkerRequest) -> Result<()> {
        let mut update_doc = to_document(update)?;
        update_doc.insert("updatedAt", Utc::now().to_rfc3339());

        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update_doc })
            .await?;
        Ok(())
    }

    pub async fn set_privileges(&self, id: ObjectId, privileges: &WorkerPrivileges) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "privileges": to_bson(privileges)?,
                    "updatedAt": Utc::now().to_rfc3339(),
                } },
            )
            .await?;
        Ok(())
    }

    pub async fn set_account_user_id(&self, id: ObjectId, user_id: ObjectId) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "accountUserId": user_id,
                    "updatedAt": Utc::now().to_rfc3339(),
                } },
            )
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
