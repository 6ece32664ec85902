//! `board` crate — job board domain: models, storage traits, and the
//! credential and job services the HTTP layer calls into.

pub mod models;
pub mod error;
pub mod store;
pub mod postgres;
pub mod memory;
pub mod credentials;
pub mod registry;

pub use models::{Credentials, Job, JobFields};
pub use error::BoardError;
pub use store::{JobStore, UserStore};
pub use postgres::PgStore;
pub use memory::MemoryStore;
pub use credentials::CredentialManager;
pub use registry::JobRegistry;
