// Infrastructure layer module
// Contains database adapters, connection setup and sample data
// Follows Hexagonal Architecture

pub mod db;
pub mod repositories;
pub mod seed;
