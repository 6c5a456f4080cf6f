use std::sync::LazyLock;

use crate::prelude::*;

/// Treat as constant, the configuration for the Argon2 hashing algorithm.
#[allow(clippy::field_reassign_with_default)]
fn hash_config() -> argon2::Config<'static> {
    let mut config = argon2::Config::default();

    config.ad = b"devconnect";
    config.mem_cost = 8 * 1024; // 8 MiB
    config.variant = argon2::Variant::Argon2id;
    config.lanes = 1;
    config.time_cost = 3;
    config.hash_length = 24;

    config
}

pub static HASH_CONFIG: LazyLock<argon2::Config<'static>> = LazyLock::new(hash_config);

fn hash_blocking(password: &str) -> Result<String, argon2::Error> {
    use rand::Rng;

    let salt: [u8; 16] = rand::thread_rng().gen();

    argon2::hash_encoded(password.as_bytes(), &salt, &HASH_CONFIG)
}

fn verify_blocking(passhash: &str, password: &str) -> Result<bool, argon2::Error> {
    let config = &*HASH_CONFIG;

    argon2::verify_encoded_ext(passhash, password.as_bytes(), config.secret, config.ad)
}

/// Computes a fresh salted hash of a plaintext password.
///
/// Argon2 is memory-hungry, so only a limited number of hashes may be in
/// flight at once.
pub async fn hash_password(state: &ServerState, password: String) -> Result<String, Error> {
    let _permit = state.mem_semaphore.acquire_many(HASH_CONFIG.mem_cost).await?;

    let hash = tokio::task::spawn_blocking(move || hash_blocking(&password)).await??;

    drop(_permit);

    Ok(hash)
}

pub async fn verify_password(
    state: &ServerState,
    passhash: String,
    password: String,
) -> Result<bool, Error> {
    let _permit = state.mem_semaphore.acquire_many(HASH_CONFIG.mem_cost).await?;

    let verified =
        tokio::task::spawn_blocking(move || verify_blocking(&passhash, &password)).await??;

    drop(_permit);

    Ok(verified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_blocking("secret1").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_blocking(&hash, "secret1").unwrap());
        assert!(!verify_blocking(&hash, "secret2").unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_blocking("secret1").unwrap();
        let b = hash_blocking("secret1").unwrap();

        assert_ne!(a, b);
    }
}
