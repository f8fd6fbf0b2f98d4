use base64::Engine;
use chrono::{Duration, Utc};
use textdesk_server::session::SessionKeys;

#[test]
fn issued_token_verifies_until_expiry() {
    let keys = SessionKeys::new(b"secret", 60);
    let now = Utc::now();
    let token = keys.issue(now);

    assert!(keys.verify(&token, now));
    assert!(keys.verify(&token, now + Duration::seconds(59)));
    assert!(!keys.verify(&token, now + Duration::seconds(60)));
}

#[test]
fn tokens_are_not_deterministic() {
    let keys = SessionKeys::new(b"secret", 60);
    let now = Utc::now();

    assert_ne!(keys.issue(now), keys.issue(now));
}

#[test]
fn token_from_another_key_is_rejected() {
    let ours = SessionKeys::new(b"secret", 60);
    let theirs = SessionKeys::new(b"other-secret", 60);
    let now = Utc::now();

    assert!(!ours.verify(&theirs.issue(now), now));
}

#[test]
fn modified_tokens_are_rejected() {
    let keys = SessionKeys::new(b"secret", 60);
    let now = Utc::now();
    let token = keys.issue(now);
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3);

    let extended = format!("{}.{}.{}", parts[0].parse::<i64>().unwrap() + 3600, parts[1], parts[2]);
    assert!(!keys.verify(&extended, now));

    let swapped_nonce = format!("{}.{}.{}", parts[0], "AAAAAAAAAAAAAAAAAAAAAA", parts[2]);
    assert!(!keys.verify(&swapped_nonce, now));

    let missing_nonce = format!("{}.{}", parts[0], parts[2]);
    for garbage in ["", "abc", "1.2", "a.b.c", "..", missing_nonce.as_str()] {
        assert!(!keys.verify(garbage, now), "accepted {:?}", garbage);
    }
}

#[test]
fn legacy_secret_derived_token_is_rejected() {
    let keys = SessionKeys::new(b"secret", 60);
    let legacy = base64::engine::general_purpose::STANDARD.encode("ok:hunter2");

    assert!(!keys.verify(&legacy, Utc::now()));
}

#[test]
fn password_comparison() {
    let keys = SessionKeys::new(b"secret", 60);

    assert!(keys.password_matches("hunter2", "hunter2"));
    assert!(!keys.password_matches("hunter", "hunter2"));
    assert!(!keys.password_matches("", "hunter2"));
    assert!(!keys.password_matches("Hunter2", "hunter2"));
}
