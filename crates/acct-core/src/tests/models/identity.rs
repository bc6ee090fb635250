use crate::{EmailAddress, Identity};

#[test]
fn test_identity_new() {
    let email = EmailAddress::parse("User@Example.com").unwrap();
    let identity = Identity::new(email, "$argon2id$stub".to_string());

    assert_eq!(identity.email, "user@example.com");
    assert_eq!(identity.secret_hash, "$argon2id$stub");
    assert!(identity.last_authenticated_at.is_none());
}

#[test]
fn test_identity_ids_are_unique() {
    let a = Identity::new(
        EmailAddress::parse("a@example.com").unwrap(),
        "hash-a".to_string(),
    );
    let b = Identity::new(
        EmailAddress::parse("b@example.com").unwrap(),
        "hash-b".to_string(),
    );

    assert_ne!(a.id, b.id);
}
