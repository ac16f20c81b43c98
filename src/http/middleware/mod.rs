//! Tower/axum middleware applied to every route.

pub mod deadline;
pub mod metrics;

pub use deadline::render_deadline;
pub use metrics::track_metrics;
