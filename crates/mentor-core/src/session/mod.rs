//! Session registry contract.

mod repository;

pub use repository::SessionRepository;
