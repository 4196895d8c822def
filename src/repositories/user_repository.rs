use crate::constants::USER_COL_NAME;
use crate::{config::database::get_collection, models::user_model::User};
use bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct UserRepository {
    pub collection: Collection<User>,
}

impl UserRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*USER_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, user: &User) -> Result<User> {
        self.collection.insert_one(user).await?;
        Ok(user.clone())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.collection.find_one(doc! { "email": email }).await
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn set_password(&self, id: ObjectId, password_hash: &str) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": {
                    "password": password_hash,
                    "updatedAt": chrono::Utc::now().to_rfc3339(),
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
