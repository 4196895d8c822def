pub mod create_account_request;
pub mod create_worker_request;
pub mod reset_password_request;
pub mod update_privileges_request;
pub mod update_worker_request;
