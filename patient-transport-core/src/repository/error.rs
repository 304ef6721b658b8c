#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unique index rejected inserted document
    #[error("insert unique violation")]
    InsertUniqueViolation,

    /// Filter of conditional update matched nothing
    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl Error {
    ///
    /// Maps duplicate key write error to [Error::InsertUniqueViolation]
    ///
    pub(super) fn from_insert_error(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        let ErrorKind::Write(ref write_failure) = *err.kind else {
            return Error::Mongo(err);
        };

        let WriteFailure::WriteError(write_error) = write_failure else {
            return Error::Mongo(err);
        };

        const DUPLICATE_KEY_CODE: i32 = 11000;
        match write_error.code == DUPLICATE_KEY_CODE {
            true => Error::InsertUniqueViolation,
            false => Error::Mongo(err),
        }
    }
}
