pub mod error_mapper;
pub mod handler;
pub mod responses;
