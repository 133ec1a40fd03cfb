//! REST API server: routes, middleware chain, DTOs, and OpenAPI documentation.

pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
