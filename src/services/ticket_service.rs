use crate::{
    errors::ServiceError,
    models::support_ticket_model::{SupportTicket, TicketResponse},
    repositories::{
        support_ticket_repository::SupportTicketRepository, worker_repository::WorkerRepository,
    },
    types::{
        models::{
            ticket::{response_author::ResponseAuthor, ticket_status::TicketStatus},
            user::role::Role,
        },
        requests::ticket::{
            submit_ticket_request::SubmitTicketRequest,
            ticket_reply_request::{RequesterReplyRequest, TicketReplyRequest},
            track_ticket_query::TrackTicketQuery,
        },
    },
    utils::{
        auth_utils::{Actor, require_worker},
        ticket_utils::{generate_ticket_number, normalize_phone},
    },
    validations::email::validate_email,
};
use bson::{Document, oid::ObjectId};
use chrono::Utc;
use std::sync::Arc;

pub struct TicketService {
    pub ticket_repository: Arc<SupportTicketRepository>,
    pub worker_repository: Arc<WorkerRepository>,
}

impl TicketService {
    pub fn new(
        ticket_repository: Arc<SupportTicketRepository>,
        worker_repository: Arc<WorkerRepository>,
    ) -> Self {
        Self {
            ticket_repository,
            worker_repository,
        }
    }

    /// Public submission; every call creates a fresh ticket with a fresh
    /// number.
    pub async fn submit(&self, data: SubmitTicketRequest) -> Result<SupportTicket, ServiceError> {
        let now = Utc::now();
        let ticket_number = generate_ticket_number(now, &mut rand::thread_rng());

        let ticket = SupportTicket {
            id: Some(ObjectId::new()),
            name: data.name,
            email: data.email.to_ascii_lowercase(),
            phone: data.phone.as_deref().and_then(normalize_phone),
            subject: data.subject,
            category: data.category,
            priority: data.priority,
            message: data.message,
            ticket_number,
            status: TicketStatus::Open,
            responses: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        Ok(self.ticket_repository.create(&ticket).await?)
    }

    /// Lookup by ticket number. Unauthenticated callers must present the
    /// requester email as a capability; staff may omit it.
    pub async fn track(
        &self,
        actor: Option<&Actor>,
        query: TrackTicketQuery,
    ) -> Result<SupportTicket, ServiceError> {
        let ticket = self
            .ticket_repository
            .find_by_number(&query.ticket_number)
            .await?
            .ok_or(ServiceError::NotFound("Ticket"))?;

        if let Some(actor) = actor {
            if actor.role.is_staff() || ticket.email.eq_ignore_ascii_case(&actor.email) {
                return Ok(ticket);
            }
        }

        let email = query.email.ok_or_else(|| {
            ServiceError::forbidden("The requester email is required to track a ticket")
        })?;
        if !ticket.email.eq_ignore_ascii_case(&email) {
            return Err(ServiceError::forbidden(
                "The email does not match this ticket",
            ));
        }

        Ok(ticket)
    }

    pub async fn list(
        &self,
        actor: &Actor,
        status: Option<TicketStatus>,
    ) -> Result<Vec<SupportTicket>, ServiceError> {
        self.ensure_support_staff(actor).await?;

        let mut filter = Document::new();
        if let Some(status) = status {
            filter.insert("status", status.to_string());
        }

        Ok(self.ticket_repository.list(filter).await?)
    }

    /// Staff reply; an open ticket moves to responded.
    pub async fn respond(
        &self,
        actor: &Actor,
        id: &str,
        data: TicketReplyRequest,
    ) -> Result<SupportTicket, ServiceError> {
        self.ensure_support_staff(actor).await?;

        if data.message.trim().is_empty() {
            return Err(ServiceError::validation("Response message must not be empty"));
        }

        let (ticket_id, ticket) = self.find_ticket(id).await?;
        if ticket.status == TicketStatus::Closed {
            return Err(ServiceError::validation("This ticket is closed"));
        }

        let next_status = if ticket.status == TicketStatus::Open {
            TicketStatus::Responded
        } else {
            ticket.status
        };

        let response = TicketResponse {
            author: ResponseAuthor::Admin,
            message: data.message,
            created_at: Utc::now(),
        };

        self.ticket_repository
            .push_response(ticket_id, &response, next_status)
            .await?;
        self.ticket_repository
            .find_by_id(ticket_id)
            .await?
            .ok_or(ServiceError::NotFound("Ticket"))
    }

    /// Requester reply, authorized by ticket number plus contact email.
    pub async fn requester_respond(
        &self,
        data: RequesterReplyRequest,
    ) -> Result<SupportTicket, ServiceError> {
        validate_email(&data.email)
            .map_err(|_| ServiceError::validation("Invalid email address"))?;
        if data.message.trim().is_empty() {
            return Err(ServiceError::validation("Response message must not be empty"));
        }

        let ticket = self
            .ticket_repository
            .find_by_number(&data.ticket_number)
            .await?
            .ok_or(ServiceError::NotFound("Ticket"))?;

        if !ticket.email.eq_ignore_ascii_case(&data.email) {
            return Err(ServiceError::forbidden(
                "The email does not match this ticket",
            ));
        }
        if ticket.status == TicketStatus::Closed {
            return Err(ServiceError::validation("This ticket is closed"));
        }

        let ticket_id = ticket.id.ok_or(ServiceError::NotFound("Ticket"))?;
        let response = TicketResponse {
            author: ResponseAuthor::Requester,
            message: data.message,
            created_at: Utc::now(),
        };

        self.ticket_repository
            .push_response(ticket_id, &response, ticket.status)
            .await?;
        self.ticket_repository
            .find_by_id(ticket_id)
            .await?
            .ok_or(ServiceError::NotFound("Ticket"))
    }

    pub async fn update_status(
        &self,
        actor: &Actor,
        id: &str,
        next: TicketStatus,
    ) -> Result<SupportTicket, ServiceError> {
        self.ensure_support_staff(actor).await?;

        let (ticket_id, ticket) = self.find_ticket(id).await?;
        if !ticket.status.can_transition_to(next) {
            return Err(ServiceError::validation(format!(
                "Cannot move a {} ticket to {}",
                ticket.status, next
            )));
        }

        self.ticket_repository.set_status(ticket_id, next).await?;
        self.ticket_repository
            .find_by_id(ticket_id)
            .await?
            .ok_or(ServiceError::NotFound("Ticket"))
    }

    async fn ensure_support_staff(&self, actor: &Actor) -> Result<(), ServiceError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Worker => {
                require_worker(actor, &self.worker_repository, |p| p.can_respond_tickets)
                    .await
                    .map(|_| ())
            }
            _ => Err(ServiceError::forbidden(
                "Support tickets are handled by staff accounts",
            )),
        }
    }

    async fn find_ticket(&self, id: &str) -> Result<(ObjectId, SupportTicket), ServiceError> {
        let ticket_id = crate::utils::validation_utils::parse_object_id(id, "ticket")?;
        let ticket = self
            .ticket_repository
            .find_by_id(ticket_id)
            .await?
            .ok_or(ServiceError::NotFound("Ticket"))?;
        Ok((ticket_id, ticket))
    }
}
