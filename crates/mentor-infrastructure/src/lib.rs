//! Infrastructure layer for Mentor: session registry and configuration loading.

pub mod config_service;
pub mod in_memory_session_repository;
pub mod paths;

pub use config_service::ConfigService;
pub use in_memory_session_repository::InMemorySessionRepository;
pub use paths::MentorPaths;
