pub mod extract;
pub mod health;
pub mod questions;
pub mod upload;
