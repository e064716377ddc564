//! MongoDB access layer: connection setup, health ping, document models,
//! and per-collection repositories.
//!
//! The shared [`mongodb::Database`] handle is created once at startup and
//! injected into handlers through the api crate's `AppState`; repositories
//! are stateless structs with static async methods taking that handle.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};

pub mod models;
pub mod repositories;

/// Connect to MongoDB and return a handle to the named database.
///
/// Pins the server to Stable API v1 in strict mode so driver upgrades
/// cannot silently start using commands outside the versioned API.
///
/// The driver connects lazily; the first actual I/O happens on the first
/// operation (use [`health_check`] at startup to fail fast).
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );

    let client = Client::with_options(options)?;
    Ok(client.database(db_name))
}

/// Ping the database to verify the connection is alive.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
