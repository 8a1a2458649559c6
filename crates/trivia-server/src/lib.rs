//! REST API server — routes, DTOs, error envelope, and OpenAPI documentation.

pub mod config;
pub mod deserializers;
pub mod dto;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod state;
