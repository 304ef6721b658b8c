use super::{
    entity::{UserFindEntity, UserInsertEntity},
    User, UsersRepository,
};
use crate::{
    auth::Role,
    repository::{ensure_collection, Error},
};
use axum::async_trait;
use bson::{doc, Document};
use mongodb::{options::IndexOptions, Database, IndexModel};

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_IDENTIFIER: &str = "unique_identifier";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        ensure_collection(&database, USERS).await?;

        let collection = database.collection::<Document>(USERS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_IDENTIFIER.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "identifier": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_IDENTIFIER.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = USERS,
                index = INDEX_NAME_UNIQUE_IDENTIFIER,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(
        &self,
        identifier: &str,
        password_hash: &str,
        role: Role,
        display_name: &str,
    ) -> Result<(), Error> {
        let insert_entity = UserInsertEntity {
            identifier,
            password_hash,
            role,
            display_name,
        };

        self.database
            .collection::<UserInsertEntity>(USERS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert_error)?;

        Ok(())
    }

    async fn find(&self, identifier: &str) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! { "identifier": identifier })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn update_password_hash(
        &self,
        identifier: &str,
        password_hash: &str,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(
                doc! {
                    "identifier": identifier,
                },
                doc! {
                    "$set": {
                        "password_hash": password_hash,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
