use crate::constants::TICKET_COL_NAME;
use crate::{
    config::database::get_collection,
    models::support_ticket_model::{SupportTicket, TicketResponse},
    types::models::ticket::ticket_status::TicketStatus,
};
use bson::{Document, oid::ObjectId};
use chrono::Utc;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, to_bson};
use mongodb::{Client, Collection, error::Result};

pub struct SupportTicketRepository {
    pub collection: Collection<SupportTicket>,
}

impl SupportTicketRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*TICKET_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create(&self, ticket: &SupportTicket) -> Result<SupportTicket> {
        self.collection.insert_one(ticket).await?;
        Ok(ticket.clone())
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<SupportTicket>> {
        self.collection.find_one(doc! { "_id": id }).await
    }

    pub async fn find_by_number(&self, ticket_number: &str) -> Result<Option<SupportTicket>> {
        self.collection
            .find_one(doc! { "ticketNumber": ticket_number })
            .await
    }

    pub async fn list(&self, filter: Document) -> Result<Vec<SupportTicket>> {
        let cursor = self.collection.find(filter).await?;
        cursor.try_collect().await
    }

    pub async fn push_response(
        &self,
        id: ObjectId,
        response: &TicketResponse,
        status: TicketStatus,
    ) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$push": { "responses": to_bson(response)? },
                    "$set": {
                        "status": status.to_string(),
                        "updatedAt": Utc::now().to_rfc3339(),
                    },
                },
            )
            .await?;
        Ok(())
    }

    pub async fn set_status(&self, id: ObjectId, status: TicketStatus) -> Result<()> {
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
}
