use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Use the configured secret, or generate one for the lifetime of the process.
/// Tokens issued with a generated secret do not survive a restart.
pub fn initialize(configured: Option<&str>) -> Result<()> {
    let secret = match configured.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => {
            tracing::warn!("auth.jwt_secret is not set, using a generated secret");
            generate_jwt_secret()
        }
    };
    JWT_SECRET
        .set(secret)
        .map_err(|_| anyhow::anyhow!("JWT secret already initialized"))
}

fn get_jwt_secret() -> Result<&'static str> {
    JWT_SECRET
        .get()
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("JWT secret is not initialized"))
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: [u8; 32] = rng.gen();
    general_purpose::STANDARD.encode(random_bytes)
}

/// Generate an access token valid for `lifetime_hours`
pub fn generate_access_token(
    user_id: &str,
    username: &str,
    is_admin: bool,
    lifetime_hours: i64,
) -> Result<String> {
    encode_claims(
        user_id,
        username,
        is_admin,
        lifetime_hours,
        get_jwt_secret()?,
    )
}

/// Validate a token and extract its claims
pub fn validate_token(token: &str) -> Result<TokenClaims> {
    decode_claims(token, get_jwt_secret()?)
}

fn encode_claims(
    user_id: &str,
    username: &str,
    is_admin: bool,
    lifetime_hours: i64,
    secret: &str,
) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(lifetime_hours)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        username: username.to_string(),
        is_admin,
        exp,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}
