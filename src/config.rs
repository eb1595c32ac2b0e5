use rand::{rngs::OsRng, RngCore};

#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC signing secret, 32 random bytes generated at startup. Held in
    /// memory only: restarting the process invalidates every outstanding token.
    pub secret: Vec<u8>,
    pub ttl_minutes: i64,
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: fresh_secret(),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };
        Ok(Self { database_url, jwt })
    }
}

fn fresh_secret() -> Vec<u8> {
    let mut secret = vec![0u8; 32];
    OsRng.fill_bytes(&mut secret);
    secret
}
