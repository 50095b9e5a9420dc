pub mod routes;
pub mod startup;
pub mod errors;
pub mod observability;
pub mod openapi;

pub use routes::{build_router, ServerState};
pub use startup::{run, run_with_config};
