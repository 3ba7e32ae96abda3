//! Domain layer - translation between wire and storage models

pub mod mapper;
pub mod repository;
pub mod service;

pub use repository::ProductRepository;
pub use service::ProductService;
