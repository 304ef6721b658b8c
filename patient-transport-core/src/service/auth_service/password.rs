//!
//! bcrypt is CPU bound, so hashing and verification run on the blocking pool
//!

use crate::error::Error;

pub async fn hash_password(password: String, cost: u32) -> Result<String, Error> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(anyhow::Error::from)?
        .map_err(anyhow::Error::from)?;

    Ok(hash)
}

///
/// ### Errors
/// - [Error::UnexpectedError] when stored hash is malformed
///
pub async fn verify_password(password: String, hash: String) -> Result<bool, Error> {
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(anyhow::Error::from)?
        .map_err(anyhow::Error::from)?;

    Ok(matches)
}
