//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence or transport
//! concerns. Serialization lives in [`crate::api::dto`], row mapping in
//! [`crate::infrastructure::persistence`].
//!
//! # Entity Types
//!
//! - [`Collection`] - A named, user-owned grouping of recommendations
//! - [`Recommendation`] - A user-owned item that can be saved into collections
//! - [`CollectionRecommendation`] - The link between one collection and one recommendation
//! - [`PageRequest`] / [`RecommendationPage`] - Paginated listing of a collection
//!
//! # Design Pattern
//!
//! Creation inputs use separate structs (`NewCollection`) so that storage
//! assigned fields (`id`, `created_at`) never have to be invented by callers.

pub mod collection;
pub mod collection_recommendation;
pub mod page;
pub mod recommendation;

pub use collection::{Collection, NewCollection};
pub use collection_recommendation::CollectionRecommendation;
pub use page::{PageRequest, RecommendationPage};
pub use recommendation::Recommendation;
