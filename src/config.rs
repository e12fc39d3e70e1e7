#[derive(Clone, Debug)]
pub struct BakeryConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: String,
    pub seed_database: bool,
    pub log_level: String,
}

impl Default for BakeryConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://app.db".to_string(),
            max_connections: 5,
            bind_address: "127.0.0.1:5555".to_string(),
            seed_database: false,
            log_level: "info".to_string(),
        }
    }
}

impl BakeryConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let database_url = std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(defaults.max_connections);

        let bind_address = std::env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address);

        let seed_database = std::env::var("SEED_DATABASE")
            .unwrap_or_else(|_| "false".to_string())
            == "true";

        let log_level = std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Self {
            database_url,
            max_connections,
            bind_address,
            seed_database,
            log_level,
        }
    }
}
