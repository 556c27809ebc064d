use chrono::Utc;
use sha2::{Digest, Sha256};
use url::Url;

/// Upper bound for the hash half of a job id
const JOB_HASH_MODULUS: u32 = 10_000;

/// Derive a human-readable title from the last non-empty path segment of a
/// URL: hyphens become spaces, words are title-cased.
///
/// `https://example.com/my-article` becomes `My Article`. A URL without path
/// segments falls back to the host name.
pub fn derive_title(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()));

    match segment {
        Some(s) => title_case(&s.replace('-', " ")),
        None => url.host_str().unwrap_or("Untitled").to_string(),
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate a job id of the form `{unix_ts}-{hash}` from the current time
/// and a bounded digest of the URL.
///
/// Collision-tolerant rather than unique: jobs are ephemeral and never
/// looked up by id.
pub fn generate_job_id(url: &Url) -> String {
    let digest = Sha256::digest(url.as_str().as_bytes());
    let hash = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) % JOB_HASH_MODULUS;
    format!("{}-{}", Utc::now().timestamp(), hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_title_from_last_segment() {
        let url = Url::parse("https://example.com/my-article").unwrap();
        assert_eq!(derive_title(&url), "My Article");
    }

    #[test]
    fn test_derive_title_normalizes_case() {
        let url = Url::parse("https://example.com/posts/my-GREAT-article").unwrap();
        assert_eq!(derive_title(&url), "My Great Article");
    }

    #[test]
    fn test_derive_title_ignores_trailing_slash() {
        let url = Url::parse("https://example.com/posts/my-article/").unwrap();
        assert_eq!(derive_title(&url), "My Article");
    }

    #[test]
    fn test_derive_title_falls_back_to_host() {
        let url = Url::parse("https://example.com/").unwrap();
        assert_eq!(derive_title(&url), "example.com");
    }

    #[test]
    fn test_job_id_matches_pattern() {
        let url = Url::parse("https://example.com/my-article").unwrap();
        let id = generate_job_id(&url);

        let (ts, hash) = id.split_once('-').expect("id should contain a dash");
        ts.parse::<i64>().expect("timestamp half should be numeric");
        let hash: u32 = hash.parse().expect("hash half should be numeric");
        assert!(hash < JOB_HASH_MODULUS);
    }

    #[test]
    fn test_job_id_hash_is_stable_per_url() {
        let url = Url::parse("https://example.com/my-article").unwrap();
        let a = generate_job_id(&url);
        let b = generate_job_id(&url);

        let hash_of = |id: &str| id.split_once('-').map(|(_, h)| h.to_string());
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
