// Pure validation of a registration candidate.
//
// Each field is checked independently so several errors can be reported in one pass.
// Nothing here touches the store; duplicate emails are detected by the store on append.

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::LazyLock;

use crate::modules::members::use_cases::register_member::command::RegisterMember;

pub const NAME_MAX_CHARS: usize = 25;
pub const PHONE_DIGITS: usize = 10;

// WHATWG "valid email address": no whitespace, one '@', dot separated host labels.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("size must be between 1 and 25")]
    NameLength,

    #[error("must contain only letters and spaces")]
    NameCharacters,

    #[error("not a well-formed email address")]
    EmailFormat,

    #[error("Email taken")]
    EmailTaken,

    #[error("size must be exactly 10 digits")]
    PhoneLength,

    #[error("must contain only digits")]
    PhoneCharacters,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::NameLength | FieldError::NameCharacters => Field::Name,
            FieldError::EmailFormat | FieldError::EmailTaken => Field::Email,
            FieldError::PhoneLength | FieldError::PhoneCharacters => Field::Phone,
        }
    }
}

/// Field errors of one candidate, kept in name, email, phone order.
///
/// Empty exactly when the candidate may be stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for its field, replacing any earlier error on the same field.
    pub fn push(&mut self, error: FieldError) {
        let field = error.field();
        self.errors.retain(|e| e.field() != field);
        self.errors.push(error);
        self.errors.sort_by_key(|e| e.field() as u8);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.iter().copied().find(|e| e.field() == field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|e| (e.field(), *e))
    }
}

impl From<FieldError> for ValidationResult {
    fn from(error: FieldError) -> Self {
        let mut result = Self::new();
        result.push(error);
        result
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}

pub fn validate_name(name: &str) -> Option<FieldError> {
    let chars = name.chars().count();
    if chars == 0 || chars > NAME_MAX_CHARS {
        return Some(FieldError::NameLength);
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Some(FieldError::NameCharacters);
    }
    None
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    (!EMAIL_PATTERN.is_match(email)).then_some(FieldError::EmailFormat)
}

pub fn validate_phone(phone: &str) -> Option<FieldError> {
    if phone.chars().count() != PHONE_DIGITS {
        return Some(FieldError::PhoneLength);
    }
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Some(FieldError::PhoneCharacters);
    }
    None
}

pub fn validate(command: &RegisterMember) -> ValidationResult {
    let mut result = ValidationResult::new();
    [
        validate_name(&command.name),
        validate_email(&command.email),
        validate_phone(&command.phone),
    ]
    .into_iter()
    .flatten()
    .for_each(|error| result.push(error));
    result
}
