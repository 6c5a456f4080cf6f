use std::sync::Arc;

use auth::TokenKey;
use sqlx::PgPool;
use tokio::sync::Semaphore;

use crate::error::Error;
use crate::services::Services;

pub struct ServerStateInner {
    pub db: PgPool,
    pub config: config::Config,

    /// Signs and verifies identity tokens.
    pub keys: TokenKey,

    /// Each permit represents 1 Kibibyte.
    ///
    /// Used to limit how many memory-intensive tasks are run at a time,
    /// chiefly argon2 hashing.
    pub mem_semaphore: Semaphore,

    pub services: Services,
}

#[derive(Clone)]
#[repr(transparent)]
pub struct ServerState(Arc<ServerStateInner>);

impl std::ops::Deref for ServerState {
    type Target = ServerStateInner;

    #[inline(always)]
    fn deref(&self) -> &ServerStateInner {
        &self.0
    }
}

impl ServerState {
    pub fn new(config: config::Config, db: PgPool) -> Result<Self, Error> {
        Ok(ServerState(Arc::new(ServerStateInner {
            db,
            keys: TokenKey::new(config.keys.token_secret.as_bytes()),
            mem_semaphore: Semaphore::new(config.general.memory_limit as usize),
            services: Services::start()?,
            config,
        })))
    }
}
