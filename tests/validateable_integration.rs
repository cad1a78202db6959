//! Integration tests for hosts built on ValidationSupport

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use fieldcheck::testing::{CountingValidator, RecordingListener};
use fieldcheck::{
    assert_invalid, assert_valid, validators, ConjunctiveValidator, DisjunctiveValidator,
    FnListener, PredicateValidator, ResourceId, SharedListener, SharedValidator, Validateable,
    ValidatedField, ValidationState, ValidationSupport, Validator, ValidatorExt,
};

const REQUIRED: ResourceId = 100;
const DIGITS_ONLY: ResourceId = 101;

fn strings() -> HashMap<ResourceId, String> {
    let mut strings = HashMap::new();
    strings.insert(REQUIRED, "err1".to_string());
    strings.insert(DIGITS_ONLY, "err2".to_string());
    strings
}

fn number_field(value: &str) -> ValidatedField<String> {
    let mut field = ValidatedField::new(value.to_string());
    field.add_validator(validators::not_empty("err1").unwrap().shared());
    field.add_validator(validators::numeric("err2").unwrap().shared());
    field
}

/// A host that validates a pair of fields, like a password confirmation.
struct PasswordForm {
    password: String,
    confirmation: String,
    validation: ValidationSupport<str>,
}

impl PasswordForm {
    fn new(password: &str, confirmation: &str) -> Self {
        let mut validation = ValidationSupport::new();
        validation.add_validator(
            validators::equal("Passwords do not match", password)
                .unwrap()
                .shared(),
        );
        Self {
            password: password.to_string(),
            confirmation: confirmation.to_string(),
            validation,
        }
    }
}

impl Validateable<str> for PasswordForm {
    fn validation(&self) -> &ValidationSupport<str> {
        &self.validation
    }

    fn validation_mut(&mut self) -> &mut ValidationSupport<str> {
        &mut self.validation
    }

    fn validate(&mut self) -> bool {
        self.validation.validate(&self.confirmation)
    }
}

#[test]
fn test_empty_value_reports_first_validator() {
    let mut field = number_field("");
    assert_invalid!(field, "err1");
}

#[test]
fn test_non_numeric_value_reports_second_validator() {
    let mut field = number_field("abc");
    assert_invalid!(field, "err2");
}

#[test]
fn test_numeric_value_notifies_success_once() {
    let listener = Rc::new(RecordingListener::new());
    let mut field = number_field("42");
    field.add_validation_listener(listener.clone());

    assert!(field.validate());
    assert_eq!(listener.successes(), 1);
    assert_eq!(listener.failures(), 0);
    assert_eq!(field.state(), &ValidationState::Valid);
}

#[test]
fn test_messages_from_resources() {
    let strings = strings();
    let mut field = ValidatedField::new(String::from("abc"));
    field.add_validator(
        PredicateValidator::from_resource(&strings, REQUIRED, |s: &String| {
            !s.is_empty()
        })
        .unwrap()
        .shared(),
    );
    field.add_validator(
        ConjunctiveValidator::from_resource(
            &strings,
            DIGITS_ONLY,
            [validators::numeric("unused").unwrap().shared()],
        )
        .unwrap()
        .shared(),
    );

    assert_invalid!(field, "err2");
}

#[test]
fn test_composite_reports_composite_message() {
    let mut field = ValidatedField::new(String::from("12345"));
    field.add_validator(
        ConjunctiveValidator::new(
            "Enter a 4 digit PIN",
            [
                validators::numeric("digits").unwrap().shared(),
                validators::max_length("too long", 4).unwrap().shared(),
            ],
        )
        .unwrap()
        .shared(),
    );

    assert_invalid!(field, "Enter a 4 digit PIN");
    field.set_value("1234".to_string());
    assert_valid!(field);
}

#[test]
fn test_optional_field_with_disjunction() {
    let optional_email: SharedValidator<String> = DisjunctiveValidator::new(
        "Enter a valid email address or leave the field empty",
        [
            PredicateValidator::new("unused", |s: &String| s.is_empty())
                .unwrap()
                .shared(),
            validators::email("unused").unwrap().shared(),
        ],
    )
    .unwrap()
    .shared();

    let mut field = ValidatedField::new(String::new());
    field.add_validator(optional_email);

    assert_valid!(field);
    field.set_value("ada@example.com".to_string());
    assert_valid!(field);
    field.set_value("ada".to_string());
    assert_invalid!(field, "Enter a valid email address or leave the field empty");
}

#[test]
fn test_custom_host() {
    let mut form = PasswordForm::new("hunter2", "hunter3");
    assert_invalid!(form, "Passwords do not match");

    form.confirmation = form.password.clone();
    assert_valid!(form);
}

#[test]
fn test_listener_sees_failed_validator() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut field = number_field("x1");
    field.add_validation_listener(Rc::new(FnListener::new(
        |_: &String| {},
        move |value: &String, validator: &dyn Validator<String>| {
            sink.borrow_mut()
                .push(format!("{value}: {}", validator.error_message()));
        },
    )));

    field.validate();
    field.set_value(String::new());
    field.validate();

    assert_eq!(*seen.borrow(), vec!["x1: err2".to_string(), ": err1".to_string()]);
}

#[test]
fn test_removed_validator_no_longer_runs() {
    let counter = Arc::new(CountingValidator::failing("counted"));
    let handle: SharedValidator<String> = counter.clone();
    let mut field = ValidatedField::new(String::from("x"));
    field.add_validator(handle.clone());

    assert!(!field.validate());
    field.remove_validator(&handle);
    assert!(field.validate());
    assert_eq!(counter.calls(), 1);
}

#[test]
fn test_remove_unknown_listener_is_noop() {
    let registered = Rc::new(RecordingListener::new());
    let stranger: SharedListener<String> = Rc::new(RecordingListener::new());
    let mut field = number_field("7");
    field.add_validation_listener(registered.clone());

    field.remove_validation_listener(&stranger);
    field.validate();

    assert_eq!(registered.successes(), 1);
}

#[test]
fn test_validate_on_value_change() {
    let listener = Rc::new(RecordingListener::new());
    let mut field = number_field("");
    field.add_validation_listener(listener.clone());

    field.set_value("1".to_string());
    assert_eq!(listener.successes() + listener.failures(), 0);

    field.validate_on_value_change(true);
    assert!(field.is_validated_on_value_change());
    field.set_value("a".to_string());
    field.set_value("2".to_string());

    assert_eq!(listener.failure_messages(), vec!["err2".to_string()]);
    assert_eq!(listener.successes(), 1);
}

#[test]
fn test_revalidation_is_unbounded() {
    let mut field = number_field("1");
    for round in 0..100 {
        let value = if round % 2 == 0 { "1" } else { "x" };
        field.set_value(value.to_string());
        assert_eq!(field.validate(), round % 2 == 0);
    }
}
