#![forbid(unsafe_code)]

pub mod retention_setup;
pub mod triage_pipeline;
