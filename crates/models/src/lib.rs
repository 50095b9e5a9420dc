pub mod errors;
pub mod db;
pub mod game;

#[cfg(test)]
mod tests;
