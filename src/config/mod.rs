use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstash_url: String,
    pub upstash_token: String,
    pub host: String,
    pub port: u16,

    /// Per-command timeout on the record store client. A read that outlives
    /// it is treated like any other store failure.
    pub store_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            upstash_url: env::var("UPSTASH_REDIS_REST_URL")
                .map_err(|_| anyhow::anyhow!("UPSTASH_REDIS_REST_URL must be set"))?,
            upstash_token: env::var("UPSTASH_REDIS_REST_TOKEN")
                .map_err(|_| anyhow::anyhow!("UPSTASH_REDIS_REST_TOKEN must be set"))?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            store_timeout_secs: env::var("STORE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()
                .unwrap_or(10),
        })
    }
}
