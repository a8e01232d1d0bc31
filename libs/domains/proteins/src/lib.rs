//! Proteins Domain
//!
//! Read-only access to protein records stored in MongoDB, plus a ranking of
//! proteins by average review rating.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, empty list → 404
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← lookups, limit check, ranking
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + MongoDB implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Protein, Review, ProteinRatings
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_proteins::{handlers, MongoProteinRepository, ProteinService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("protein");
//!
//! let repository = MongoProteinRepository::new(&db);
//! let service = ProteinService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod ranking;
pub mod repository;
pub mod service;

pub use error::{ProteinError, ProteinResult};
pub use handlers::{ApiDoc, TopRatedQuery};
pub use models::{Protein, ProteinRatings, Review, ReviewRating};
pub use mongodb::MongoProteinRepository;
pub use repository::ProteinRepository;
pub use service::ProteinService;
