//! Form field checks for the login and registration pages.
//!
//! Only presence and format are checked here; every business rule (unique
//! email, password policy beyond length) is the server's call.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use esg_api::RegistrationForm;

/// Departments offered by the registration form.
pub const DEPARTMENTS: [&str; 7] = [
    "Human Resources",
    "Finance",
    "Marketing",
    "Engineering",
    "Operations",
    "Administration",
    "Other",
];

/// Per-field error messages keyed by form field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

/// Lightweight address check: one `@`, a non-empty local part, and a dotted
/// domain, with no whitespace anywhere.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[must_use]
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if email.trim().is_empty() {
        errors.insert("email", "Email is required");
    }
    if password.is_empty() {
        errors.insert("password", "Password is required");
    }
    errors
}

#[must_use]
pub fn validate_registration(form: &RegistrationForm, accepted_terms: bool) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let username_len = form.username.trim().chars().count();
    if username_len < 3 {
        errors.insert("username", "Username must be at least 3 characters");
    } else if username_len > 20 {
        errors.insert("username", "Username must be at most 20 characters");
    }

    if !is_valid_email(&form.email) {
        errors.insert("email", "Enter a valid email address");
    }

    if form.full_name.trim().chars().count() < 2 {
        errors.insert("full_name", "Name must be at least 2 characters");
    }

    if form.department.trim().is_empty() {
        errors.insert("department", "Select a department");
    }

    if form.password.chars().count() < 6 {
        errors.insert("password", "Password must be at least 6 characters");
    }

    if form.password != form.confirm_password {
        errors.insert("confirm_password", "Passwords do not match");
    }

    if !accepted_terms {
        errors.insert("terms", "Accept the terms to continue");
    }

    errors
}
