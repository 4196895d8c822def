use crate::constants::BOOKING_COL_NAME;
use crate::{
    config::database::get_collection, models::booking_model::Booking,
    types::models::booking::booking_status::BookingStatus,
};
use bson::{Document, oid::ObjectId};
use chrono::Utc;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct BookingRepository {
    pub collection: Collection<Booking>,
}

impl BookingRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*BOOKING_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, booking: &Booking) -> Result<Booking> {
        self.collection.insert_one(booking).await?;
        Ok(booking.clone())
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Booking>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn list(&self, filter: Document) -> Result<Vec<Booking>> {
        let cursor = self.collection.find(filter).await?;
        cursor.try_collect().await
    }

    pub async fn set_status(&self, id: ObjectId, status: BookingStatus) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "status": status.to_string(),
                    "updatedAt": Utc::now().to_rfc3339(),
                } },
            )
            .await?;
        Ok(())
    }

    pub async fn set_commission_paid(&self, id: ObjectId, paid: bool) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "commissionPaid": paid,
                    "updatedAt": Utc::now().to_rfc3339(),
                } },
            )
            .await?;
        Ok(())
    }
}
