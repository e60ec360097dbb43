// Application layer - use cases and data-access seams
pub mod dashboard_registry;
pub mod dataset_repository;
pub mod strategy_service;
