// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod error_mapper;
pub mod http_transport;
