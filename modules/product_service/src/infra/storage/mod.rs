//! Storage layer - product entity, sessions, schema bootstrap and repository

pub mod entity;
pub mod mapper;
pub mod repositories;
pub mod schema;
pub mod session;

pub use entity::{Product, ProductTable};
pub use repositories::SeaOrmProductRepository;
pub use schema::ensure_schema;
pub use session::{connect_admin, Session};
