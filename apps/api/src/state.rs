use sea_orm::DatabaseConnection;

/// State handed to every handler. Cloning is cheap: the connection is a
/// pool handle and the config is plain data.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: DatabaseConnection,
}
