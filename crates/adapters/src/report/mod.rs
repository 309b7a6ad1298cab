mod console_reporter;
mod log_reporter;

pub use console_reporter::ConsoleReporter;
pub use log_reporter::LogReporter;
