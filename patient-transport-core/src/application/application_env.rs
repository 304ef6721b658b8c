use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_encoding_key, parse_jwt_key};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family.
    /// Tokens are signed with the first one.
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_encoding_key: EncodingKey,
    pub jwt_decoding_key: DecodingKey,

    pub session_inactivity_timeout: Duration,
    pub password_hash_cost: u32,
    pub seed_demo_users: bool,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("PATIENT_TRANSPORT_CORE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("PATIENT_TRANSPORT_CORE_LOG_FILENAME")?;
        let bind_address = Self::env_var("PATIENT_TRANSPORT_CORE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("PATIENT_TRANSPORT_CORE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("PATIENT_TRANSPORT_CORE_DB_NAME")?;
        let max_http_content_len =
            Self::env_var("PATIENT_TRANSPORT_CORE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms =
            parse_jwt_algorithms(Self::env_var("PATIENT_TRANSPORT_CORE_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "PATIENT_TRANSPORT_CORE_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_encoding_key = parse_jwt_encoding_key(
            jwt_algorithm,
            Self::env_var("PATIENT_TRANSPORT_CORE_JWT_ENCODING_KEY")?,
        )?;
        let jwt_decoding_key = parse_jwt_key(
            jwt_algorithm,
            Self::env_var("PATIENT_TRANSPORT_CORE_JWT_DECODING_KEY")?,
        )?;
        let session_inactivity_timeout =
            Self::env_var("PATIENT_TRANSPORT_CORE_SESSION_INACTIVITY_TIMEOUT")?.parse()?;
        let session_inactivity_timeout = Duration::from_secs(session_inactivity_timeout);
        let password_hash_cost =
            Self::env_var("PATIENT_TRANSPORT_CORE_PASSWORD_HASH_COST")?.parse()?;
        let seed_demo_users = Self::env_var("PATIENT_TRANSPORT_CORE_SEED_DEMO_USERS")?.parse()?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithms,
            jwt_encoding_key,
            jwt_decoding_key,
            session_inactivity_timeout,
            password_hash_cost,
            seed_demo_users,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
