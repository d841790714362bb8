pub use crate::utils::database;
use crate::{
    modules::{auth, cart, menu, order, restaurant, user},
    utils::config::{AppEnvironment, BootstrapConfig, Config},
};
use async_trait::async_trait;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub port: u16,
    pub environment: AppEnvironment,
    pub debug: bool,
    pub cookie_key: Key,
}

#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn user::repository::Repository>,
    pub sessions: Arc<dyn auth::repository::SessionRepository>,
    pub restaurants: Arc<dyn restaurant::repository::Repository>,
    pub menu_items: Arc<dyn menu::repository::Repository>,
    pub cart: Arc<dyn cart::repository::Repository>,
    pub orders: Arc<dyn order::repository::Repository>,
    pub health: Arc<dyn database::Health>,
}

impl Repositories {
    pub fn postgres(db_conn: database::DatabaseConnection) -> Self {
        let pool = db_conn.pool.clone();

        Self {
            users: Arc::new(user::repository::PgRepository::new(pool.clone())),
            sessions: Arc::new(auth::repository::PgSessionRepository::new(pool.clone())),
            restaurants: Arc::new(restaurant::repository::PgRepository::new(pool.clone())),
            menu_items: Arc::new(menu::repository::PgRepository::new(pool.clone())),
            cart: Arc::new(cart::repository::PgRepository::new(pool.clone())),
            orders: Arc::new(order::repository::PgRepository::new(pool)),
            health: Arc::new(db_conn),
        }
    }

    #[cfg(test)]
    pub fn memory(db: Arc<database::memory::MemoryDatabase>) -> Self {
        Self {
            users: db.clone(),
            sessions: db.clone(),
            restaurants: db.clone(),
            menu_items: db.clone(),
            cart: db.clone(),
            orders: db.clone(),
            health: db,
        }
    }
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub bootstrap: BootstrapConfig,
    pub repos: Repositories,
}

impl Context {
    pub fn new(config: Config, repos: Repositories) -> Self {
        let cookie_key = Key::from(Sha512::digest(config.app.secret_key.as_bytes()).as_slice());

        Self {
            app: AppContext {
                host: config.app.host,
                port: config.app.port,
                environment: config.app.environment,
                debug: config.app.debug,
                cookie_key,
            },
            bootstrap: config.bootstrap,
            repos,
        }
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db_conn = database::connect(&self.database).await?;

        if self.bootstrap.init_db {
            database::migrate(&db_conn).await?;
        }

        Ok(Context::new(self, Repositories::postgres(db_conn)))
    }
}
