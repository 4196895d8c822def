use crate::{
    errors::ServiceError,
    models::booking_model::Booking,
    repositories::{
        booking_repository::BookingRepository, car_repository::CarRepository,
        commission_level_repository::CommissionLevelRepository,
        property_repository::PropertyRepository, worker_repository::WorkerRepository,
    },
    types::{
        models::{
            booking::{booking_kind::BookingKind, booking_status::BookingStatus},
            user::role::Role,
            worker::privileges::WorkerPrivileges,
        },
        requests::booking::{
            analytics_query::AnalyticsQuery, booking_query::BookingQuery,
            create_booking_request::CreateBookingRequest,
        },
    },
    utils::{
        analytics_utils::{BookingAnalytics, booking_analytics},
        auth_utils::{Actor, require_worker, worker_scope},
        commission_utils::{commission_amount, select_rate},
        date_utils::{day_start, next_day_start},
        validation_utils::parse_object_id,
    },
};
use bson::{Document, doc, oid::ObjectId, to_bson};
use chrono::Utc;
use std::sync::Arc;

pub struct BookingService {
    pub booking_repository: Arc<BookingRepository>,
    pub property_repository: Arc<PropertyRepository>,
    pub car_repository: Arc<CarRepository>,
    pub commission_level_repository: Arc<CommissionLevelRepository>,
    pub worker_repository: Arc<WorkerRepository>,
}

impl BookingService {
    pub fn new(
        booking_repository: Arc<BookingRepository>,
        property_repository: Arc<PropertyRepository>,
        car_repository: Arc<CarRepository>,
        commission_level_repository: Arc<CommissionLevelRepository>,
        worker_repository: Arc<WorkerRepository>,
    ) -> Self {
        Self {
            booking_repository,
            property_repository,
            car_repository,
            commission_level_repository,
            worker_repository,
        }
    }

    pub async fn create_booking(
        &self,
        actor: &Actor,
        data: CreateBookingRequest,
    ) -> Result<Booking, ServiceError> {
        if data.end_date < data.start_date {
            return Err(ServiceError::validation("End date must not precede start date"));
        }
        if matches!(data.kind, BookingKind::Property | BookingKind::Car)
            && data.end_date == data.start_date
        {
            return Err(ServiceError::validation(
                "A rental booking must span at least one day",
            ));
        }
        if data.total_amount < 0.0 {
            return Err(ServiceError::validation("Total amount must be non-negative"));
        }

        let guest_id = match &data.guest {
            Some(guest) => {
                if !actor.is_admin() {
                    return Err(ServiceError::forbidden(
                        "Only administrators can book on behalf of another guest",
                    ));
                }
                parse_object_id(guest, "guest")?
            }
            None => actor.id,
        };

        let (listing_id, owner_id, commission_level_id) = match data.kind {
            BookingKind::Property => {
                let id = data.listing.as_deref().ok_or_else(|| {
                    ServiceError::validation("A property booking requires a listing id")
                })?;
                let property = self
                    .property_repository
                    .find_by_id(parse_object_id(id, "property")?)
                    .await?
                    .ok_or(ServiceError::NotFound("Property"))?;
                (property.id, Some(property.owner_id), property.commission_level_id)
            }
            BookingKind::Car => {
                let id = data.listing.as_deref().ok_or_else(|| {
                    ServiceError::validation("A car booking requires a listing id")
                })?;
                let car = self
                    .car_repository
                    .find_by_id(parse_object_id(id, "car")?)
                    .await?
                    .ok_or(ServiceError::NotFound("Car"))?;
                (car.id, Some(car.owner_id), car.commission_level_id)
            }
            BookingKind::Flight => {
                if data.route.is_none() || data.airline.is_none() {
                    return Err(ServiceError::validation(
                        "A flight booking requires a route and an airline",
                    ));
                }
                (None, None, None)
            }
        };

        let commission_level = match commission_level_id {
            Some(id) => self.commission_level_repository.find_by_id(id).await?,
            None => None,
        };
        let commission_rate = select_rate(
            commission_level.as_ref(),
            data.channel,
            data.commission_rate,
        )?;

        let now = Utc::now();
        let booking = Booking {
            id: Some(ObjectId::new()),
            kind: data.kind,
            guest_id,
            listing_id,
            owner_id,
            route: data.route,
            airline: data.airline,
            start_date: day_start(data.start_date),
            end_date: day_start(data.end_date),
            total_amount: data.total_amount,
            status: BookingStatus::Pending,
            channel: data.channel,
            commission_rate,
            commission_amount: commission_rate.map(|rate| commission_amount(data.total_amount, rate)),
            commission_paid: false,
            created_at: now,
            updated_at: now,
        };

        Ok(self.booking_repository.create(&booking).await?)
    }

    pub async fn list_bookings(
        &self,
        actor: &Actor,
        query: BookingQuery,
    ) -> Result<Vec<Booking>, ServiceError> {
        let mut filter = self.scope_filter(actor).await?;

        if let Some(kind) = query.kind {
            filter.insert("kind", kind.to_string());
        }
        if let Some(status) = query.status {
            filter.insert("status", status.to_string());
        }

        let mut date_filter = Document::new();
        if let Some(from) = query.from {
            date_filter.insert("$gte", to_bson(&day_start(from))?);
        }
        if let Some(to) = query.to {
            date_filter.insert("$lt", to_bson(&next_day_start(to))?);
        }
        if !date_filter.is_empty() {
            filter.insert("startDate", date_filter);
        }

        Ok(self.booking_repository.list(filter).await?)
    }

    pub async fn update_status(
        &self,
        actor: &Actor,
        id: &str,
        next: BookingStatus,
    ) -> Result<Booking, ServiceError> {
        let (booking_id, booking) = self.find_booking(id).await?;

        self.authorize_transition(actor, &booking, next).await?;

        if booking.status.is_terminal() {
            return Err(ServiceError::validation(format!(
                "A {} booking can no longer change status",
                booking.status
            )));
        }
        if !booking.status.can_transition_to(next) {
            return Err(ServiceError::validation(format!(
                "Cannot move a {} booking to {}",
                booking.status, next
            )));
        }

        self.booking_repository.set_status(booking_id, next).await?;
        self.booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or(ServiceError::NotFound("Booking"))
    }

    pub async fn set_commission_paid(
        &self,
        actor: &Actor,
        id: &str,
        paid: bool,
    ) -> Result<Booking, ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::forbidden(
                "Only administrators can settle commissions",
            ));
        }

        let (booking_id, _) = self.find_booking(id).await?;
        self.booking_repository
            .set_commission_paid(booking_id, paid)
            .await?;
        self.booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or(ServiceError::NotFound("Booking"))
    }

    pub async fn analytics(
        &self,
        actor: &Actor,
        query: AnalyticsQuery,
    ) -> Result<BookingAnalytics, ServiceError> {
        let mut filter = match actor.role {
            Role::Admin => Document::new(),
            Role::Owner => doc! { "ownerId": actor.id },
            Role::Worker => {
                let worker =
                    require_worker(actor, &self.worker_repository, |p| p.can_view_reports).await?;
                doc! { "ownerId": worker.owner_id }
            }
            Role::Guest => {
                return Err(ServiceError::forbidden(
                    "Dashboards are not available to guest accounts",
                ));
            }
        };

        let mut date_filter = Document::new();
        if let Some(from) = query.from {
            date_filter.insert("$gte", to_bson(&day_start(from))?);
        }
        if let Some(to) = query.to {
            date_filter.insert("$lt", to_bson(&next_day_start(to))?);
        }
        if !date_filter.is_empty() {
            filter.insert("startDate", date_filter);
        }

        let bookings = self.booking_repository.list(filter).await?;
        Ok(booking_analytics(&bookings, Utc::now()))
    }

    async fn scope_filter(&self, actor: &Actor) -> Result<Document, ServiceError> {
        match actor.role {
            Role::Admin => Ok(Document::new()),
            Role::Owner => Ok(doc! { "ownerId": actor.id }),
            Role::Guest => Ok(doc! { "guestId": actor.id }),
            Role::Worker => {
                let owner_id =
                    worker_scope(actor, &self.worker_repository, |p| p.can_view_bookings).await?;
                match owner_id {
                    Some(owner_id) => Ok(doc! { "ownerId": owner_id }),
                    None => Ok(Document::new()),
                }
            }
        }
    }

    async fn authorize_transition(
        &self,
        actor: &Actor,
        booking: &Booking,
        next: BookingStatus,
    ) -> Result<(), ServiceError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Owner => {
                if booking.owner_id == Some(actor.id) {
                    Ok(())
                } else {
                    Err(ServiceError::forbidden(
                        "This booking belongs to another owner",
                    ))
                }
            }
            Role::Guest => {
                // A guest may withdraw their own booking, nothing else.
                if next == BookingStatus::Cancelled && booking.guest_id == actor.id {
                    Ok(())
                } else {
                    Err(ServiceError::forbidden(
                        "Guests can only cancel their own bookings",
                    ))
                }
            }
            Role::Worker => {
                let selector: fn(&WorkerPrivileges) -> bool = match next {
                    BookingStatus::Confirmed => |p| p.can_confirm_bookings,
                    BookingStatus::Cancelled => |p| p.can_cancel_bookings,
                    _ => |p| p.can_edit_bookings,
                };
                let worker = require_worker(actor, &self.worker_repository, selector).await?;
                if booking.owner_id == Some(worker.owner_id) {
                    Ok(())
                } else {
                    Err(ServiceError::forbidden(
                        "This booking belongs to another owner",
                    ))
                }
            }
        }
    }

    async fn find_booking(&self, id: &str) -> Result<(ObjectId, Booking), ServiceError> {
        let booking_id = parse_object_id(id, "booking")?;
        let booking = self
            .booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or(ServiceError::NotFound("Booking"))?;
        Ok((booking_id, booking))
    }
}
