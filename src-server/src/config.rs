use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("AL_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid AL_LISTEN_ADDR");
        let data_dir = std::env::var("AL_DATA_DIR").unwrap_or_else(|_| "./data".into());
        let cors_allow = std::env::var("AL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("AL_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let static_dir = std::env::var("AL_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        Self {
            listen_addr,
            data_dir,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
        }
    }
}
