mod error;
mod tickets_repository;
mod users_repository;

pub use error::*;
pub use tickets_repository::*;
pub use users_repository::*;

use mongodb::Database;

///
/// Creates collection unless it already exists
///
async fn ensure_collection(database: &Database, name: &str) -> Result<(), mongodb::error::Error> {
    let collection_names = database.list_collection_names().await?;
    if !collection_names.iter().any(|collection| collection == name) {
        tracing::debug!(collection = name, "creating collection");
        database.create_collection(name).await?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use mongodb::{options::ClientOptions, Client, Database};
    use uuid::Uuid;

    pub async fn create_test_database() -> Database {
        let _ = dotenvy::dotenv();
        let db_connection_string =
            std::env::var("PATIENT_TRANSPORT_CORE_DB_CONNECTION_STRING").unwrap();
        let db_name = format!("test_{}", Uuid::new_v4());

        println!("creating test database: {db_name}");

        let db_client_options = ClientOptions::parse(db_connection_string).await.unwrap();
        let db_client = Client::with_options(db_client_options).unwrap();

        db_client.database(&db_name)
    }

    pub async fn destroy_test_database(database: Database) {
        let _ = database.drop().await;
        database.client().clone().shutdown().await;
    }
}
