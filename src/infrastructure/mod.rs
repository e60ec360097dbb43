// Infrastructure layer - external dependencies and adapters
pub mod assets;
pub mod config;
pub mod csv_repository;
pub mod figure_mapper;
