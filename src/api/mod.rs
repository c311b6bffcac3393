//! HTTP API module for the salary reporter.
//!
//! This module exposes the report pipeline as a REST endpoint that accepts
//! raw employee JSON and returns the rendered CSV or HTML report.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportQuery;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
