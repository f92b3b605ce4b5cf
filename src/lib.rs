//! Trip Planner Backend Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod planner;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use planner::PlannerState;
