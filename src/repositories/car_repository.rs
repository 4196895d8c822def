use crate::constants::CAR_COL_NAME;
use crate::{
    config::database::get_collection, models::car_model::Car,
    types::requests::car::update_car_request::UpdateCarRequest,
};
use bson::oid::ObjectId;
use chrono::Utc;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, to_document};
use mongodb::{Client, Collection, error::Result};

pub struct CarRepository {
    pub collection: Collection<Car>,
}

impl CarRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*CAR_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, car: &Car) -> Result<Car> {
        self.collection.insert_one(car).await?;
        Ok(car.clone())
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Car>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn list_by_owner(&self, owner_id: ObjectId) -> Result<Vec<Car>> {
        let cursor = self.collection.find(doc! { "ownerId": owner_id }).await?;
        cursor.try_collect().await
    }

    pub async fn list_all(&self) -> Result<Vec<Car>> {
        let cursor = self.collection.find(doc! {}).await?;
        cursor.try_collect().await
    }

    pub async fn update(&self, id: ObjectId, update: &UpdateCarRequest) -> Result<()> {
        let mut update_doc = to_document(update)?;
        update_doc.insert("updatedAt", Utc::now().to_rfc3339());

        self.collection
            .update_one(doc! { "_id": id }, doc! { "$set": update_doc })
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
