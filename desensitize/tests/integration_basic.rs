//! End-to-end tests for the public masking API.
//!
//! These tests exercise the integration of:
//! - `Desensitize` schema generation,
//! - cascade traversal with its skip rules, and
//! - classification-bound policy application.

use desensitize::{
    instance, Desensitizable, Desensitize, Error, IdNumber, PersonName, Phone, Secret,
};

#[derive(Clone, Debug, Default, PartialEq, Desensitize)]
struct Person {
    name: String,
    #[sensitive(IdNumber)]
    ssn: String,
}

#[test]
fn classified_field_is_masked_and_plain_field_kept() {
    let person = Person {
        name: "Ann".to_owned(),
        ssn: "123-45-6789".to_owned(),
    };
    let masked = desensitize::desensitize(&person).expect("person resolves");
    assert_eq!(masked.name, "Ann");
    assert_eq!(masked.ssn, "*******6789");
}

#[test]
fn source_graph_is_never_mutated() {
    let person = Person {
        name: "Ann".to_owned(),
        ssn: "123-45-6789".to_owned(),
    };
    let snapshot = person.clone();
    let _masked = desensitize::desensitize(&person).expect("person resolves");
    assert_eq!(person, snapshot);
}

#[test]
fn repeated_masking_is_idempotent_on_already_masked_values() {
    let person = Person {
        name: "Ann".to_owned(),
        ssn: "123-45-6789".to_owned(),
    };
    let once = desensitize::desensitize(&person).expect("first pass resolves");
    let twice = desensitize::desensitize(&once).expect("second pass resolves");
    // keep_last(4) fixes the visible tail, so a second pass changes nothing.
    assert_eq!(once, twice);
}

#[test]
fn desensitizable_method_matches_free_function() {
    let person = Person {
        name: "Ann".to_owned(),
        ssn: "123-45-6789".to_owned(),
    };
    let by_method = person.desensitize().expect("person resolves");
    let by_function = desensitize::desensitize(&person).expect("person resolves");
    assert_eq!(by_method, by_function);
}

#[derive(Clone, Debug, Default, PartialEq, Desensitize)]
struct Company {
    #[sensitive(PersonName)]
    owner: String,
    #[sensitive(Phone)]
    phone: String,
    city: String,
}

#[derive(Clone, Debug, Default, PartialEq, Desensitize)]
struct Employee {
    #[sensitive(PersonName)]
    name: String,
    #[sensitive(cascade)]
    employer: Company,
}

#[test]
fn cascade_marked_field_is_expanded_recursively() {
    let employee = Employee {
        name: "Robert".to_owned(),
        employer: Company {
            owner: "Grace".to_owned(),
            phone: "13812345678".to_owned(),
            city: "Berlin".to_owned(),
        },
    };
    let masked = desensitize::desensitize(&employee).expect("employee resolves");
    assert_eq!(masked.name, "R*****");
    assert_eq!(masked.employer.owner, "G****");
    assert_eq!(masked.employer.phone, "138****5678");
    assert_eq!(masked.employer.city, "Berlin");
}

#[derive(Clone, Debug, Default, PartialEq, Desensitize)]
struct CompanyHolder {
    // Same composite type as above, but no cascade marker: the declaration
    // site opted out, so the value must pass through untouched.
    employer: Company,
}

#[test]
fn composite_field_without_marker_is_never_expanded() {
    let holder = CompanyHolder {
        employer: Company {
            owner: "Grace".to_owned(),
            phone: "13812345678".to_owned(),
            city: "Berlin".to_owned(),
        },
    };
    let masked = desensitize::desensitize(&holder).expect("holder resolves");
    assert_eq!(masked.employer, holder.employer);
}

#[derive(Clone, Debug, Default, PartialEq, Desensitize)]
struct Account {
    #[sensitive(Secret)]
    token: Option<String>,
    #[sensitive(frozen)]
    id: u64,
    #[sensitive(Secret)]
    recovery_codes: Vec<String>,
}

#[test]
fn present_option_field_is_masked_in_place() {
    let account = Account {
        token: Some("tok_live_123".to_owned()),
        id: 42,
        recovery_codes: Vec::new(),
    };
    let masked = desensitize::desensitize(&account).expect("account resolves");
    assert_eq!(masked.token.as_deref(), Some("[MASKED]"));
}

#[test]
fn empty_option_field_stays_empty() {
    let account = Account {
        token: None,
        id: 42,
        recovery_codes: Vec::new(),
    };
    let masked = desensitize::desensitize(&account).expect("account resolves");
    assert_eq!(masked.token, None);
}

#[test]
fn frozen_field_keeps_the_constructed_default() {
    let account = Account {
        token: None,
        id: 42,
        recovery_codes: Vec::new(),
    };
    let masked = desensitize::desensitize(&account).expect("account resolves");
    // The cascade never writes frozen fields, so the copy keeps u64::default().
    assert_eq!(masked.id, 0);
}

#[test]
fn classified_string_vec_is_masked_element_wise() {
    let account = Account {
        token: None,
        id: 1,
        recovery_codes: vec!["alpha-1".to_owned(), "bravo-2".to_owned()],
    };
    let masked = desensitize::desensitize(&account).expect("account resolves");
    assert_eq!(
        masked.recovery_codes,
        vec!["[MASKED]".to_owned(), "[MASKED]".to_owned()]
    );
}

#[derive(Clone, Debug, PartialEq, Desensitize)]
#[sensitive(no_default)]
struct SealedVault {
    #[sensitive(Secret)]
    key: String,
}

#[test]
fn no_default_type_without_creator_fails_to_instantiate() {
    let vault = SealedVault {
        key: "k".to_owned(),
    };
    let err = desensitize::desensitize(&vault).expect_err("no creator registered");
    assert!(matches!(
        err,
        Error::Instantiation {
            type_name: "SealedVault"
        }
    ));
}

#[derive(Clone, Debug, PartialEq, Desensitize)]
#[sensitive(no_default)]
struct RegisteredVault {
    #[sensitive(Secret)]
    key: String,
}

#[test]
fn registered_creator_unlocks_no_default_types() {
    instance::register(|| RegisteredVault {
        key: String::new(),
    });
    let vault = RegisteredVault {
        key: "k".to_owned(),
    };
    let masked = desensitize::desensitize(&vault).expect("creator is registered");
    assert_eq!(masked.key, "[MASKED]");
}

#[derive(Clone, Debug, PartialEq, Desensitize)]
#[sensitive(no_default)]
struct NestedVault {
    #[sensitive(Secret)]
    key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Desensitize)]
struct VaultOwner {
    #[sensitive(cascade)]
    vault: Option<NestedVault>,
}

#[test]
fn nested_failure_names_the_field_path() {
    let owner = VaultOwner {
        vault: Some(NestedVault {
            key: "k".to_owned(),
        }),
    };
    let err = desensitize::desensitize(&owner).expect_err("nested type has no creator");
    match &err {
        Error::Field {
            type_name, field, ..
        } => {
            assert_eq!(*type_name, "VaultOwner");
            assert_eq!(*field, "vault");
        }
        other => panic!("expected a field error, got {other:?}"),
    }
    let source = std::error::Error::source(&err).expect("source should be present");
    assert!(source.to_string().contains("NestedVault"));
}

#[test]
fn failed_resolution_returns_no_partial_result_and_keeps_input_intact() {
    let owner = VaultOwner {
        vault: Some(NestedVault {
            key: "k".to_owned(),
        }),
    };
    let snapshot = owner.clone();
    assert!(desensitize::desensitize(&owner).is_err());
    assert_eq!(owner, snapshot);
}

#[derive(Clone, Debug, Default, PartialEq, Desensitize)]
struct WideRecord {
    #[sensitive(Secret)]
    a: String,
    #[sensitive(Secret)]
    b: String,
    #[sensitive(Secret)]
    c: String,
    #[sensitive(Secret)]
    d: String,
    plain_a: String,
    plain_b: u32,
    #[sensitive(Phone)]
    e: String,
    #[sensitive(Phone)]
    f: String,
}

#[test]
fn many_fields_resolve_independently() {
    let record = WideRecord {
        a: "a".to_owned(),
        b: "b".to_owned(),
        c: "c".to_owned(),
        d: "d".to_owned(),
        plain_a: "visible".to_owned(),
        plain_b: 7,
        e: "13812345678".to_owned(),
        f: "13987654321".to_owned(),
    };
    let masked = desensitize::desensitize(&record).expect("record resolves");
    assert_eq!(masked.a, "[MASKED]");
    assert_eq!(masked.b, "[MASKED]");
    assert_eq!(masked.c, "[MASKED]");
    assert_eq!(masked.d, "[MASKED]");
    assert_eq!(masked.plain_a, "visible");
    assert_eq!(masked.plain_b, 7);
    assert_eq!(masked.e, "138****5678");
    assert_eq!(masked.f, "139****4321");
}

#[derive(Clone, Debug, Default, PartialEq, Desensitize)]
struct Unmarked {
    value: String,
    count: u32,
}

#[test]
fn fully_unannotated_type_round_trips_unchanged() {
    let unmarked = Unmarked {
        value: "anything".to_owned(),
        count: 3,
    };
    let masked = desensitize::desensitize(&unmarked).expect("unmarked resolves");
    assert_eq!(masked, unmarked);
}
