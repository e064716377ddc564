//! Per-collection repositories.
//!
//! Stateless structs with static async methods taking the shared
//! [`mongodb::Database`] handle. Every method is a single driver call.

pub mod blog_repo;
pub mod history_repo;
pub mod product_repo;
pub mod user_repo;

pub use blog_repo::BlogRepo;
pub use history_repo::HistoryRepo;
pub use product_repo::ProductRepo;
pub use user_repo::UserRepo;
