//! Shared handler state

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{Config, JwtConfig};

/// Handle given to every handler through `State`; clones share one pool
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Shared>,
}

struct Shared {
    db: PgPool,
    config: Config,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            inner: Arc::new(Shared { db, config }),
        }
    }

    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Token signing settings
    pub fn jwt(&self) -> &JwtConfig {
        &self.inner.config.jwt
    }
}
