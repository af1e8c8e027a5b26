use crate::error::GeneratorError;
use crate::KeyGenerator;
use keywell_core::Document;
use rand::Rng;
use typed_builder::TypedBuilder;
use uuid::Uuid;

/// Characters drawn for random alphanumeric candidates.
const CANDIDATE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A fixed-length random alphanumeric candidate generator.
///
/// The candidate domain is `62^length`; size `length` for the collection
/// you expect, since a nearly full domain means a collision retry per
/// taken value and a fully exhausted one never terminates the retry
/// loop.
#[derive(Debug, Clone, TypedBuilder)]
pub struct AlphanumericGenerator {
    /// Number of random characters, excluding the prefix.
    #[builder(default = 8)]
    length: usize,
    /// Fixed prefix prepended to every candidate.
    #[builder(default, setter(into))]
    prefix: String,
}

impl AlphanumericGenerator {
    /// The configured number of random characters.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl KeyGenerator for AlphanumericGenerator {
    type Output = String;

    fn generate(&self, _document: &Document) -> Result<String, GeneratorError> {
        let mut rng = rand::rng();
        let mut candidate = String::with_capacity(self.prefix.len() + self.length);
        candidate.push_str(&self.prefix);
        for _ in 0..self.length {
            let idx = rng.random_range(0..CANDIDATE_CHARS.len());
            candidate.push(CANDIDATE_CHARS[idx] as char);
        }
        Ok(candidate)
    }
}

/// Random v4 UUID candidates.
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator {
    simple: bool,
}

impl UuidGenerator {
    /// Hyphenated form, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`.
    pub fn new() -> Self {
        Self { simple: false }
    }

    /// 32 hex characters, no hyphens.
    pub fn simple() -> Self {
        Self { simple: true }
    }
}

impl KeyGenerator for UuidGenerator {
    type Output = String;

    fn generate(&self, _document: &Document) -> Result<String, GeneratorError> {
        let id = Uuid::new_v4();
        if self.simple {
            Ok(id.simple().to_string())
        } else {
            Ok(id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next<G: KeyGenerator<Output = String>>(generator: &G) -> String {
        generator.generate(&Document::new()).unwrap()
    }

    #[test]
    fn respects_the_configured_length() {
        for length in [1, 4, 8, 32] {
            let generator = AlphanumericGenerator::builder().length(length).build();
            assert_eq!(next(&generator).len(), length);
        }
    }

    #[test]
    fn defaults_to_eight_characters() {
        let generator = AlphanumericGenerator::builder().build();
        assert_eq!(generator.length(), 8);
        assert_eq!(next(&generator).len(), 8);
    }

    #[test]
    fn draws_only_alphanumeric_characters() {
        let generator = AlphanumericGenerator::builder().length(64).build();
        let candidate = next(&generator);
        assert!(candidate.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn prepends_the_prefix() {
        let generator = AlphanumericGenerator::builder()
            .length(4)
            .prefix("doc-")
            .build();
        let candidate = next(&generator);
        assert!(candidate.starts_with("doc-"));
        assert_eq!(candidate.len(), 8);
    }

    #[test]
    fn hyphenated_uuid_shape() {
        let candidate = next(&UuidGenerator::new());
        assert_eq!(candidate.len(), 36);
        assert_eq!(candidate.matches('-').count(), 4);
    }

    #[test]
    fn simple_uuid_shape() {
        let candidate = next(&UuidGenerator::simple());
        assert_eq!(candidate.len(), 32);
        assert!(candidate.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn successive_uuids_differ() {
        let generator = UuidGenerator::new();
        assert_ne!(next(&generator), next(&generator));
    }
}
