//! Demonstrates validating a sign-up form with logging enabled
//!
//! Run with: cargo run --example signup_form --features tracing

use std::rc::Rc;

use fieldcheck::prelude::*;

fn main() -> Result<(), InvalidArgument> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let error_label = Rc::new(FnListener::new(
        |value: &String| tracing::info!(%value, "field accepted"),
        |value: &String, validator: &dyn Validator<String>| {
            tracing::warn!(%value, error = validator.error_message(), "field rejected")
        },
    ));

    let mut username = ValidatedField::new(String::new());
    username.add_validator(validators::not_empty("Choose a username")?.shared());
    username.add_validator(
        ConjunctiveValidator::new(
            "Usernames are 3 to 16 letters or digits",
            [
                validators::alphanumeric("unused")?.shared(),
                validators::min_length("unused", 3)?.shared(),
                validators::max_length("unused", 16)?.shared(),
            ],
        )?
        .shared(),
    );
    username.add_validation_listener(error_label.clone());
    username.validate_on_value_change(true);

    let mut email = ValidatedField::new(String::new());
    email.add_validator(validators::email("Enter a valid email address")?.shared());
    email.add_validation_listener(error_label);

    for candidate in ["", "ab", "ada_l", "adalovelace"] {
        username.set_value(candidate.to_string());
    }

    email.set_value("ada@analytical.engine".to_string());
    let ready = email.validate() && username.state().is_valid();
    tracing::info!(ready, "form checked");

    Ok(())
}
