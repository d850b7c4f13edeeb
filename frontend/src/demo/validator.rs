use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// The inputs of the demo request form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Email,
    PracticeName,
    Role,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::PracticeName,
        FormField::Role,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::PracticeName => "practiceName",
            FormField::Role => "role",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoRole {
    Pcp,
    Specialist,
    PracticeAdministrator,
    PeFirm,
    Other,
}

impl DemoRole {
    pub const ALL: [DemoRole; 5] = [
        DemoRole::Pcp,
        DemoRole::Specialist,
        DemoRole::PracticeAdministrator,
        DemoRole::PeFirm,
        DemoRole::Other,
    ];

    /// Label shown in the select, also used as the option value.
    pub fn label(&self) -> &'static str {
        match self {
            DemoRole::Pcp => "PCP",
            DemoRole::Specialist => "Specialist",
            DemoRole::PracticeAdministrator => "Practice Administrator",
            DemoRole::PeFirm => "PE Firm",
            DemoRole::Other => "Other",
        }
    }

    pub fn from_label(value: &str) -> Option<DemoRole> {
        DemoRole::ALL.into_iter().find(|role| role.label() == value)
    }
}

/// Raw values of one demo request, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub practice_name: String,
    /// Selected role label, empty while nothing is selected.
    pub role: String,
    pub message: String,
}

impl FormInput {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::PracticeName => &self.practice_name,
            FormField::Role => &self.role,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::PracticeName => self.practice_name = value,
            FormField::Role => self.role = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Practice name must be at least 2 characters")]
    PracticeNameTooShort,
    #[error("Please select a role")]
    RoleMissing,
}

/// Field-level errors of one validation pass. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FormField, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn message(&self, field: FormField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }
}

fn min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

pub fn is_valid_email(email: &str) -> bool {
    email.is_ascii() && EMAIL_PATTERN.is_match(email)
}

pub fn validate(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if !min_chars(&input.name, 2) {
        errors.insert(FormField::Name, FieldError::NameTooShort);
    }

    let email = input.email.trim();
    if email.is_empty() {
        errors.insert(FormField::Email, FieldError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.insert(FormField::Email, FieldError::EmailInvalid);
    }

    if !min_chars(&input.practice_name, 2) {
        errors.insert(FormField::PracticeName, FieldError::PracticeNameTooShort);
    }

    if DemoRole::from_label(&input.role).is_none() {
        errors.insert(FormField::Role, FieldError::RoleMissing);
    }

    errors
}
