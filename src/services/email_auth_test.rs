use super::*;

fn store() -> AccessCodeStore {
    AccessCodeStore::new(Duration::from_secs(600))
}

/// Any valid code that differs from `code`.
fn wrong_code(code: &str) -> String {
    if code == "AAAAAA" { "BBBBBB".to_owned() } else { "AAAAAA".to_owned() }
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Ada@Example.COM "), Some("ada@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_malformed() {
    for raw in ["", "   ", "ada", "@example.com", "ada@", "a@b@c"] {
        assert_eq!(normalize_email(raw), None, "{raw:?}");
    }
}

// =============================================================================
// normalize_code
// =============================================================================

#[test]
fn normalize_code_uppercases() {
    assert_eq!(normalize_code(" abc234 "), Some("ABC234".to_owned()));
}

#[test]
fn normalize_code_rejects_wrong_length() {
    assert_eq!(normalize_code("ABC23"), None);
    assert_eq!(normalize_code("ABC2345"), None);
}

#[test]
fn normalize_code_rejects_ambiguous_characters() {
    // 0, O, 1 and I are excluded from the alphabet.
    assert_eq!(normalize_code("ABC230"), None);
    assert_eq!(normalize_code("ABCDEO"), None);
    assert_eq!(normalize_code("ABC231"), None);
    assert_eq!(normalize_code("ABCDEI"), None);
}

// =============================================================================
// generate_access_code / hash_access_code
// =============================================================================

#[test]
fn generated_codes_are_normalized() {
    for _ in 0..32 {
        let code = generate_access_code();
        assert_eq!(normalize_code(&code).as_deref(), Some(code.as_str()));
    }
}

#[test]
fn hash_is_sha256_hex() {
    let hash = hash_access_code("ABC234");
    assert_eq!(hash.len(), 64);
    assert_eq!(hash, hash_access_code("ABC234"));
    assert_ne!(hash, hash_access_code("ABC235"));
}

#[test]
fn name_from_email_uses_local_part() {
    assert_eq!(name_from_email("ada@example.com"), "ada");
}

// =============================================================================
// AccessCodeStore
// =============================================================================

#[tokio::test]
async fn request_rejects_invalid_email() {
    assert_eq!(store().request("not-an-email").await, Err(EmailAuthError::InvalidEmail));
}

#[tokio::test]
async fn verify_with_issued_code_returns_user() {
    let store = store();
    let code = store.request("Ada@Example.com").await.unwrap();
    let user = store.verify("ada@example.com", &code.to_ascii_lowercase()).await.unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "ada");
}

#[tokio::test]
async fn code_is_single_use() {
    let store = store();
    let code = store.request("ada@example.com").await.unwrap();
    store.verify("ada@example.com", &code).await.unwrap();
    assert_eq!(
        store.verify("ada@example.com", &code).await,
        Err(EmailAuthError::VerificationFailed)
    );
}

#[tokio::test]
async fn same_email_keeps_same_user_id() {
    let store = store();
    let first = store.request("ada@example.com").await.unwrap();
    let a = store.verify("ada@example.com", &first).await.unwrap();
    let second = store.request("ada@example.com").await.unwrap();
    let b = store.verify("ada@example.com", &second).await.unwrap();
    assert_eq!(a.id, b.id);
}

#[tokio::test]
async fn new_request_replaces_outstanding_code() {
    let store = store();
    let first = store.request("ada@example.com").await.unwrap();
    let second = store.request("ada@example.com").await.unwrap();
    if first != second {
        assert_eq!(
            store.verify("ada@example.com", &first).await,
            Err(EmailAuthError::VerificationFailed)
        );
    }
    assert!(store.verify("ada@example.com", &second).await.is_ok());
}

#[tokio::test]
async fn verify_without_request_fails() {
    assert_eq!(
        store().verify("ada@example.com", "ABC234").await,
        Err(EmailAuthError::VerificationFailed)
    );
}

#[tokio::test]
async fn verify_rejects_malformed_code() {
    assert_eq!(store().verify("ada@example.com", "12").await, Err(EmailAuthError::InvalidCode));
}

#[tokio::test]
async fn code_burns_after_max_failed_attempts() {
    let store = store();
    let code = store.request("ada@example.com").await.unwrap();
    let wrong = wrong_code(&code);
    for _ in 0..MAX_FAILED_ATTEMPTS {
        assert_eq!(
            store.verify("ada@example.com", &wrong).await,
            Err(EmailAuthError::VerificationFailed)
        );
    }
    assert_eq!(
        store.verify("ada@example.com", &code).await,
        Err(EmailAuthError::VerificationFailed)
    );
}

#[tokio::test]
async fn code_survives_fewer_failed_attempts() {
    let store = store();
    let code = store.request("ada@example.com").await.unwrap();
    let wrong = wrong_code(&code);
    for _ in 0..MAX_FAILED_ATTEMPTS - 1 {
        let _ = store.verify("ada@example.com", &wrong).await;
    }
    assert!(store.verify("ada@example.com", &code).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn expired_code_is_rejected() {
    let store = store();
    let code = store.request("ada@example.com").await.unwrap();
    tokio::time::advance(Duration::from_secs(601)).await;
    assert_eq!(
        store.verify("ada@example.com", &code).await,
        Err(EmailAuthError::VerificationFailed)
    );
}

#[tokio::test(start_paused = true)]
async fn request_drops_expired_codes_for_other_emails() {
    let store = store();
    for i in 0..100 {
        store.request(&format!("user{i}@example.com")).await.unwrap();
    }
    assert_eq!(store.pending_count().await, 100);

    tokio::time::advance(Duration::from_secs(24 * 60 * 60)).await;
    store.request("ada@example.com").await.unwrap();
    assert_eq!(store.pending_count().await, 1);
}

#[tokio::test(start_paused = true)]
async fn purge_expired_keeps_live_codes() {
    let store = store();
    store.request("old@example.com").await.unwrap();
    tokio::time::advance(Duration::from_secs(300)).await;
    let code = store.request("new@example.com").await.unwrap();
    tokio::time::advance(Duration::from_secs(301)).await;

    assert_eq!(store.purge_expired(Instant::now()).await, 1);
    assert_eq!(store.pending_count().await, 1);
    assert!(store.verify("new@example.com", &code).await.is_ok());
}
