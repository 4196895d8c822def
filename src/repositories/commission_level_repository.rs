use crate::constants::COMMISSION_LEVEL_COL_NAME;
use crate::{
    config::database::get_collection,
    models::commission_level_model::CommissionLevel,
    types::requests::commission::commission_level_request::UpdateCommissionLevelRequest,
};
use bson::oid::ObjectId;
use chrono::Utc;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, to_document};
use mongodb::{Client, Collection, error::Result};

pub struct CommissionLevelRepository {
    pub collection: Collection<CommissionLevel>,
}

impl CommissionLevelRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*COMMISSION_LEVEL_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, level: &CommissionLevel) -> Result<CommissionLevel> {
        self.collection.insert_one(level).await?;
        Ok(level.clone())
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<CommissionLevel>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn list_all(&self) -> Result<Vec<CommissionLevel>> {
        let cursor = self.collection.find(doc! {}).await?;
        cursor.try_collect().await
    }

    pub async fn update(&self, id: ObjectId, update: &UpdateCommissionLevelRequest) -> Result<()> {
        let mut update_doc = to_document(update)?;
        update_doc.insert("updatedAt", Utc::now().to_rfc3339());

        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update_doc })
            .await?;
        Ok(())
    }

    /// At most one level may be flagged default; call before setting a new one.
    pub async fn clear_default_flags(&self) -> Result<()> {
        self.collection
            .update_many(
                doc! { "isDefault": true },
                doc! { "$set": { "isDefault": false } },
            )
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
