use crate::constants::PROPERTY_COL_NAME;
use crate::{
    config::database::get_collection, models::property_model::Property,
    types::requests::property::update_property_request::UpdatePropertyRequest,
};
use bson::oid::ObjectId;
use chrono::Utc;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, to_document};
use mongodb::{Client, Collection, error::Result};

pub struct PropertyRepository {
    pub collection: Collection<Property>,
}

impl PropertyRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*PROPERTY_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, property: &Property) -> Result<Property> {
        self.collection.insert_one(property).await?;
        Ok(property.clone())
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Property>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn list_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Property>> {
        let cursor = self.collection.find(doc! { "ownerId": owner_id }).await?;
        cursor.try_collect().await
    }

    pub async fn list_all(&self) -> Result<Vec<Property>> {
        let cursor = self.collection.find(doc! {}).await?;
        cursor.try_collect().await
    }

    pub async fn update(&self, id: ObjectId, update: &UpdatePropertyRequest) -> Result<()> {
        let mut update_doc = to_document(update)?;
        update_doc.insert("updatedAt", Utc::now().to_rfc3339());

        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update_doc })
            .await?;
        Ok(())
    }

    /// Removes a deleted worker from every assignment list it appears in.
    pub async fn pull_worker_assignments(&self, worker_id: ObjectId) -> Result<()> {
        self.collection
            .update_many(
                doc! { "assignedWorkerIds": worker_id },
                doc! { "$pull": { "assignedWorkerIds": worker_id } },
            )
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
