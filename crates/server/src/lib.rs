pub mod assets;
pub mod errors;
pub mod observability;
pub mod openapi;
pub mod request_log;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{build_app, run, with_middleware};
pub use state::AppState;
