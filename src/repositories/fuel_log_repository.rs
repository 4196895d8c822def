use crate::constants::FUEL_LOG_COL_NAME;
use crate::{config::database::get_collection, models::fuel_log_model::FuelLog};
use bson::{Document, oid::ObjectId};
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct FuelLogRepository {
    pub collection: Collection<FuelLog>,
}

impl FuelLogRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*FUEL_LOG_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, log: &FuelLog) -> Result<FuelLog> {
        self.collection.insert_one(log).await?;
        Ok(log.clone())
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<FuelLog>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn list(&self, filter: Document) -> Result<Vec<FuelLog>> {
        let cursor = self.collection.find(filter).await?;
        cursor.try_collect().await
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
