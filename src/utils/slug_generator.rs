//! Slug allocation and the rules a caller-supplied slug must satisfy.
//!
//! Generated slugs are not checked for uniqueness here. A collision is
//! detected by the store's conditional insert and reported as a conflict.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::cell::RefCell;
use std::sync::LazyLock;
use validator::ValidationError;

/// Length of generated slugs.
pub const SLUG_LENGTH: usize = 6;

/// Alphabet for generated slugs: 26 lowercase, 26 uppercase, 10 digits.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Path segments routed by the service itself.
pub const RESERVED_SLUGS: &[&str] = &["api", "health"];

/// Character class allowed in caller-supplied slugs.
pub static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").unwrap());

thread_local! {
    static SLUG_RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_rng(&mut rand::rng()));
}

/// Generates a random slug using a fast, non-cryptographic per-thread generator.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 6);
/// assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_slug() -> String {
    SLUG_RNG.with(|rng| generate_slug_with(&mut *rng.borrow_mut()))
}

/// Generates a slug from the given random source.
///
/// Each character is drawn uniformly, with replacement, from the 62-character alphabet.
pub fn generate_slug_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SLUG_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Rejects slugs that would shadow a route of the service.
pub fn validate_not_reserved(slug: &str) -> Result<(), ValidationError> {
    if RESERVED_SLUGS.contains(&slug) {
        return Err(ValidationError::new("reserved"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_62_distinct_characters() {
        let distinct: HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(distinct.len(), 62);
    }

    #[test]
    fn test_generate_slug_has_correct_length() {
        assert_eq!(generate_slug().len(), SLUG_LENGTH);
    }

    #[test]
    fn test_generate_slug_alphanumeric_only() {
        for _ in 0..100 {
            let slug = generate_slug();
            assert!(SLUG_REGEX.is_match(&slug));
            assert!(slug.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_slug_varies() {
        let slugs: HashSet<String> = (0..1000).map(|_| generate_slug()).collect();
        // 62^6 possibilities; a handful of collisions in 1000 draws would already be suspicious.
        assert!(slugs.len() > 990);
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        assert_eq!(generate_slug_with(&mut a), generate_slug_with(&mut b));
    }

    #[test]
    fn test_generation_covers_all_character_classes() {
        let mut rng = StdRng::seed_from_u64(7);
        let joined: String = (0..200).map(|_| generate_slug_with(&mut rng)).collect();

        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generated_slugs_pass_slug_rules() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let slug = generate_slug_with(&mut rng);
            assert!(validate_not_reserved(&slug).is_ok());
        }
    }

    #[test]
    fn test_reserved_slugs_rejected() {
        for &reserved in RESERVED_SLUGS {
            let err = validate_not_reserved(reserved).unwrap_err();
            assert_eq!(err.code, "reserved");
        }
    }

    #[test]
    fn test_reserved_check_is_exact() {
        assert!(validate_not_reserved("apis").is_ok());
        assert!(validate_not_reserved("my-api").is_ok());
    }

    #[test]
    fn test_slug_regex() {
        assert!(SLUG_REGEX.is_match("abc-DEF-123"));
        assert!(!SLUG_REGEX.is_match("with space"));
        assert!(!SLUG_REGEX.is_match("under_score"));
        assert!(!SLUG_REGEX.is_match("slash/slug"));
        assert!(!SLUG_REGEX.is_match(""));
    }
}
