//! HTTP inbound adapter exposing the orders REST endpoints.

pub mod error;
pub mod health;
pub mod orders;
pub mod orders_dto;
pub mod state;

pub use error::ApiResult;
