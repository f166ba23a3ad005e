//! Storage layer - database entities, migrations and repositories

pub mod entity;
pub mod error;
pub mod mapper;
pub mod migrations;
pub mod repositories;
