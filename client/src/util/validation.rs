//! Client-side form validation.
//!
//! A form that fails validation never issues a request; the per-field
//! messages render inline under each input.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{Credentials, UserDraft};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "email must be a valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is required";
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match";
pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
}

/// Per-field validation failures, at most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<(Field, &'static str)>,
}

impl ValidationErrors {
    fn add(&mut self, field: Field, message: &'static str) {
        if self.get(field).is_none() {
            self.errors.push((field, message));
        }
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.iter().find(|(f, _)| *f == field).map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

/// Basic email shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

fn check_email(errors: &mut ValidationErrors, email: &str) -> String {
    let email = email.trim();
    if email.is_empty() {
        errors.add(Field::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(email) {
        errors.add(Field::Email, EMAIL_INVALID);
    }
    email.to_owned()
}

fn check_required(errors: &mut ValidationErrors, field: Field, value: &str, message: &'static str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, message);
    }
    value.to_owned()
}

/// Validate the login form.
///
/// # Errors
///
/// Returns the failing fields when the email is missing or malformed or the
/// password is empty.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let email = check_email(&mut errors, email);
    if password.is_empty() {
        errors.add(Field::Password, PASSWORD_REQUIRED);
    }
    errors.finish(Credentials { email, password: password.to_owned() })
}

/// Validate the registration form. Only email and password are submitted.
///
/// # Errors
///
/// Returns the failing fields, including a mismatched confirmation.
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<Credentials, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let email = check_email(&mut errors, email);
    if password.is_empty() {
        errors.add(Field::Password, PASSWORD_REQUIRED);
    }
    if confirm.is_empty() {
        errors.add(Field::ConfirmPassword, CONFIRM_PASSWORD_REQUIRED);
    } else if confirm != password {
        errors.add(Field::ConfirmPassword, PASSWORDS_MUST_MATCH);
    }
    errors.finish(Credentials { email, password: password.to_owned() })
}

/// Validate the create/edit user form.
///
/// # Errors
///
/// Returns the failing fields when a name is blank or the email is invalid.
pub fn validate_user_draft(
    first_name: &str,
    last_name: &str,
    email: &str,
    avatar: Option<&str>,
) -> Result<UserDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let first_name = check_required(&mut errors, Field::FirstName, first_name, FIRST_NAME_REQUIRED);
    let last_name = check_required(&mut errors, Field::LastName, last_name, LAST_NAME_REQUIRED);
    let email = check_email(&mut errors, email);
    let avatar = avatar.map(str::trim).filter(|a| !a.is_empty()).map(str::to_owned);
    errors.finish(UserDraft { email, first_name, last_name, avatar })
}
