use std::ops::RangeInclusive;

pub fn validate_name(name: &str, len: RangeInclusive<usize>) -> bool {
    let trimmed = name.trim();

    len.contains(&trimmed.chars().count()) && !trimmed.chars().any(|c| c.is_ascii_control())
}

/// Only a length requirement; complexity rules are deliberately absent.
pub fn validate_password(password: &str, len: RangeInclusive<usize>) -> bool {
    len.contains(&password.chars().count())
}

/// It's basically impossible to properly validate an email other than to
/// just send the email, so the best we can do is check for an `@` with
/// something on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.len() > 2048 {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

pub fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_both_sides_of_the_at() {
        assert!(validate_email("a@x.com"));
        assert!(validate_email("a@b"));

        assert!(!validate_email(""));
        assert!(!validate_email("plain"));
        assert!(!validate_email("@x.com"));
        assert!(!validate_email("a@"));
    }

    #[test]
    fn password_is_length_only() {
        let range = 6..=512;

        assert!(validate_password("secret1", range.clone()));
        assert!(validate_password("abcdef", range.clone()));
        assert!(!validate_password("short", range));
    }

    #[test]
    fn names_must_be_present_and_printable() {
        let range = 1..=64;

        assert!(validate_name("A", range.clone()));
        assert!(!validate_name("   ", range.clone()));
        assert!(!validate_name("bad\u{7}name", range));
    }

    #[test]
    fn text_presence() {
        assert!(non_empty("hello"));
        assert!(!non_empty(" \t "));
    }
}
