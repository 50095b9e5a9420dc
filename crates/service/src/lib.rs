//! Service layer providing the catalog operations on top of models.
//! - Separates business rules (validation, existence checks) from data access.
//! - Reuses field validators and the entity definition in the `models` crate.

pub mod errors;
pub mod games;
pub mod seed;
#[cfg(test)]
pub mod test_support;
