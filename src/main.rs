mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;
mod types;
mod utils;
mod validations;

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::{env, sync::Arc};

use crate::{
    config::database::{connect_to_database, create_unique_indexes},
    repositories::{
        booking_repository::BookingRepository, car_repository::CarRepository,
        commission_level_repository::CommissionLevelRepository,
        fuel_log_repository::FuelLogRepository, property_repository::PropertyRepository,
        support_ticket_repository::SupportTicketRepository, user_repository::UserRepository,
        worker_repository::WorkerRepository,
    },
    routes::{
        auth_routes::configure_auth_routes, booking_routes::configure_booking_routes,
        car_routes::configure_car_routes, commission_routes::configure_commission_routes,
        fuel_log_routes::configure_fuel_log_routes, property_routes::configure_property_routes,
        ticket_routes::configure_ticket_routes, worker_routes::configure_worker_routes,
    },
    services::{
        booking_service::BookingService, car_service::CarService,
        commission_service::CommissionService, fuel_log_service::FuelLogService,
        property_service::PropertyService, ticket_service::TicketService,
        user_service::UserService, worker_service::WorkerService,
    },
};

#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let client = connect_to_database()
        .await
        .context("Failed to connect to MongoDB")?;
    create_unique_indexes(&client)
        .await
        .context("Failed to create unique indexes")?;

    let user_repository = Arc::new(UserRepository::new(&client).await?);
    let car_repository = Arc::new(CarRepository::new(&client).await?);
    let property_repository = Arc::new(PropertyRepository::new(&client).await?);
    let fuel_log_repository = Arc::new(FuelLogRepository::new(&client).await?);
    let worker_repository = Arc::new(WorkerRepository::new(&client).await?);
    let booking_repository = Arc::new(BookingRepository::new(&client).await?);
    let commission_level_repository = Arc::new(CommissionLevelRepository::new(&client).await?);
    let ticket_repository = Arc::new(SupportTicketRepository::new(&client).await?);

    let user_service = web::Data::new(Arc::new(UserService::new(user_repository.clone())));
    let car_service = web::Data::new(Arc::new(CarService::new(
        car_repository.clone(),
        worker_repository.clone(),
    )));
    let property_service = web::Data::new(Arc::new(PropertyService::new(
        property_repository.clone(),
        worker_repository.clone(),
    )));
    let fuel_log_service = web::Data::new(Arc::new(FuelLogService::new(
        fuel_log_repository,
        car_repository.clone(),
        worker_repository.clone(),
    )));
    let worker_service = web::Data::new(Arc::new(WorkerService::new(
        worker_repository.clone(),
        user_repository,
        property_repository.clone(),
    )));
    let booking_service = web::Data::new(Arc::new(BookingService::new(
        booking_repository,
        property_repository,
        car_repository,
        commission_level_repository.clone(),
        worker_repository.clone(),
    )));
    let commission_service = web::Data::new(Arc::new(CommissionService::new(
        commission_level_repository,
    )));
    let ticket_service = web::Data::new(Arc::new(TicketService::new(
        ticket_repository,
        worker_repository,
    )));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(8080);

    info!("Starting server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .configure(|cfg| configure_auth_routes(cfg, user_service.clone()))
            .configure(|cfg| configure_car_routes(cfg, car_service.clone()))
            .configure(|cfg| configure_property_routes(cfg, property_service.clone()))
            .configure(|cfg| configure_fuel_log_routes(cfg, fuel_log_service.clone()))
            .configure(|cfg| configure_worker_routes(cfg, worker_service.clone()))
            .configure(|cfg| configure_booking_routes(cfg, booking_service.clone()))
            .configure(|cfg| configure_commission_routes(cfg, commission_service.clone()))
            .configure(|cfg| configure_ticket_routes(cfg, ticket_service.clone()))
    })
    .bind((host.as_str(), port))
    .context("Failed to bind server address")?
    .run()
    .await
    .context("Server terminated unexpectedly")
}
