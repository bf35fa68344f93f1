use serde::Serialize;

use crate::modules::members::core::validation::{ValidationResult, validate};
use crate::modules::members::use_cases::register_member::command::RegisterMember;

pub type MemberId = u64;

/// A registration that is stored and displayed. Only the store creates these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A candidate that passed validation and may be appended to the store.
///
/// Fields are private so the only way in from outside the crate is [`NewMember::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    name: String,
    email: String,
    phone: String,
}

impl NewMember {
    pub fn parse(command: RegisterMember) -> Result<Self, ValidationResult> {
        let result = validate(&command);
        if !result.is_empty() {
            return Err(result);
        }
        Ok(Self {
            name: command.name,
            email: command.email,
            phone: command.phone,
        })
    }

    pub(crate) fn seed() -> Self {
        Self {
            name: "John Smith".to_string(),
            email: "john.smith@mailinator.com".to_string(),
            phone: "2125551212".to_string(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}
