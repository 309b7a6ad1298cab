pub mod alert_source;
pub mod inference_client;
pub mod outcome_reporter;
pub mod retention_admin;
