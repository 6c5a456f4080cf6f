use md5::{Digest, Md5};

/// Gravatar URL for an email: 200px, pg-rated, "mystery man" fallback.
///
/// Gravatar keys on the md5 of the trimmed, lowercased address.
pub fn gravatar_url(email: &str) -> String {
    let hash = Md5::digest(email.trim().to_lowercase().as_bytes());

    format!("https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm", hex::encode(hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized_before_hashing() {
        assert_eq!(gravatar_url(" A@X.com "), gravatar_url("a@x.com"));
        assert_ne!(gravatar_url("a@x.com"), gravatar_url("b@x.com"));
    }

    #[test]
    fn url_shape() {
        let url = gravatar_url("a@x.com");

        let hash = url
            .strip_prefix("https://www.gravatar.com/avatar/")
            .and_then(|rest| rest.strip_suffix("?s=200&r=pg&d=mm"))
            .unwrap();

        assert_eq!(hash.len(), 32);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
