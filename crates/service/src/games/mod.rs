//! Catalog module: domain payloads, repository seam, and the service on top.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::{CreateGameInput, UpdateGameInput};
pub use repo::seaorm::SeaOrmGameRepository;
pub use repository::GameRepository;
pub use service::GameService;
