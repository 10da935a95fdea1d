//! End-to-end validation of request-shaped records.

use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use sieve_validator::combinators::{FieldViolation, MapKeyViolation};
use sieve_validator::prelude::*;

#[derive(Debug, Default)]
struct CreateUserRequest {
    name: String,
    password: String,
    confirmation_password: String,
}

fn create_user() -> Join<CreateUserRequest> {
    let fields = record(|s: &mut FieldBinder<'_, CreateUserRequest>| {
        s.add(
            "name",
            |r: &CreateUserRequest| &r.name,
            join![
                length(5, 20),
                pattern_str("^[a-zA-Z0-9]+$").with_format("does not allow not-alphabets or not-digits", []),
            ],
        );
        s.add("password", |r: &CreateUserRequest| &r.password, min_length(8));
        s.add(
            "confirmation-password",
            |r: &CreateUserRequest| &r.confirmation_password,
            min_length(8),
        );
    });
    let same_password = custom(|r: &CreateUserRequest| r.password == r.confirmation_password)
        .with_format("passwords does not match", []);

    join![fields, same_password]
}

#[test]
fn invalid_request_reports_every_violation() {
    let request = CreateUserRequest {
        name: ".adm".into(),
        password: "1234".into(),
        confirmation_password: "abcd".into(),
    };

    let err = create_user().validate(&Context::new(), &request).unwrap_err();

    let mut messages = err.messages();
    messages.sort_unstable();
    let mut expected = vec![
        "name: the length must be in range(5 ... 20)",
        "name: does not allow not-alphabets or not-digits",
        "password: the length must be no less than 8",
        "confirmation-password: the length must be no less than 8",
        "passwords does not match",
    ];
    expected.sort_unstable();
    assert_eq!(messages, expected);
}

#[test]
fn invalid_request_renders_in_binding_order() {
    let request = CreateUserRequest {
        name: ".adm".into(),
        password: "1234".into(),
        confirmation_password: "abcd".into(),
    };

    let err = create_user().validate(&Context::new(), &request).unwrap_err();
    assert_eq!(
        err.to_string(),
        "name: the length must be in range(5 ... 20)\n\
         name: does not allow not-alphabets or not-digits\n\
         password: the length must be no less than 8\n\
         confirmation-password: the length must be no less than 8\n\
         passwords does not match"
    );
    assert!(matches!(err, ValidationError::Join(_)));
}

#[test]
fn valid_request_passes() {
    let request = CreateUserRequest {
        name: "validname".into(),
        password: "longenough".into(),
        confirmation_password: "longenough".into(),
    };
    assert!(create_user().validate(&Context::new(), &request).is_ok());
}

#[test]
fn field_payload_exposes_the_failing_value() {
    let request = CreateUserRequest {
        name: "validname".into(),
        password: "short".into(),
        confirmation_password: "short".into(),
    };
    let err = create_user().validate(&Context::new(), &request).unwrap_err();
    let leaves = err.flatten();
    assert_eq!(leaves.len(), 2);

    let field = leaves[0].payload::<FieldViolation>().unwrap();
    assert_eq!(field.name, "password");
    assert_eq!(field.value.to_string(), "short");
    assert_eq!(field.error.code(), Some("the length must be no less than {0}"));
}

// ============================================================================
// NESTED SHAPES
// ============================================================================

#[derive(Debug, Default)]
struct Address {
    city: String,
    zip: String,
}

#[derive(Debug, Default)]
struct Profile {
    nickname: Option<String>,
    tags: Vec<String>,
    address: Address,
    limits: BTreeMap<String, i64>,
    role: String,
}

fn address() -> Record<Address> {
    record(|s: &mut FieldBinder<'_, Address>| {
        s.add("city", |a: &Address| &a.city, required::<String>());
        s.add("zip", |a: &Address| &a.zip, pattern_str("^[0-9]{3}-[0-9]{4}$"));
    })
}

fn profile() -> Record<Profile> {
    let limits: Map<BTreeMap<String, i64>, String, i64> = map()
        .key("cpu".to_owned(), in_range(1, 64))
        .any(min(0));

    record(|s: &mut FieldBinder<'_, Profile>| {
        s.add("nickname", |p: &Profile| &p.nickname, optional(min_length(3)));
        s.add("tags", |p: &Profile| &p.tags, each(max_length(8)));
        s.add("address", |p: &Profile| &p.address, address());
        s.add("limits", |p: &Profile| &p.limits, limits);
        s.add(
            "role",
            |p: &Profile| &p.role,
            one_of(vec!["admin".to_owned(), "user".to_owned()]),
        );
    })
}

#[test]
fn nested_shapes_prefix_once_per_level() {
    let input = Profile {
        nickname: Some("al".into()),
        tags: vec!["ok".into(), "far too long".into()],
        address: Address {
            city: String::new(),
            zip: "1000001".into(),
        },
        limits: BTreeMap::from([("cpu".to_owned(), 128), ("disk".to_owned(), -1)]),
        role: "root".into(),
    };

    let err = profile().validate(&Context::new(), &input).unwrap_err();
    assert_eq!(
        err.messages(),
        vec![
            "nickname: the length must be no less than 3",
            "tags: the length must be no greater than 8",
            "address: city: cannot be the zero value",
            "address: zip: must match the pattern /^[0-9]{3}-[0-9]{4}$/",
            "limits: cpu: must be in range(1 ... 64)",
            "limits: disk: must be no less than 0",
            "role: must be a valid value in [admin user]",
        ]
    );
}

#[test]
fn nested_map_leaf_keeps_both_payload_levels() {
    let input = Profile {
        address: Address {
            city: "Osaka".into(),
            zip: "530-0001".into(),
        },
        limits: BTreeMap::from([("cpu".to_owned(), 0)]),
        role: "user".into(),
        ..Profile::default()
    };

    let err = profile().validate(&Context::new(), &input).unwrap_err();
    let ValidationError::Record(rec) = &err else {
        panic!("expected record error, got {err:?}");
    };
    assert_eq!(rec.errors().len(), 1);

    let leaf = err.flatten()[0];
    let field = leaf.payload::<FieldViolation>().unwrap();
    assert_eq!(field.name, "limits");
    let entry = field.error.payload::<MapKeyViolation>().unwrap();
    assert_eq!(entry.key.to_string(), "cpu");
    assert_eq!(entry.error.message(), "must be in range(1 ... 64)");
}

#[test]
fn absent_optional_and_empty_collections_pass() {
    let input = Profile {
        address: Address {
            city: "Kyoto".into(),
            zip: "600-8216".into(),
        },
        role: "admin".into(),
        ..Profile::default()
    };
    assert!(profile().validate(&Context::new(), &input).is_ok());
}
