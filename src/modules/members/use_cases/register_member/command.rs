use serde::Deserialize;

/// An unvalidated registration attempt, as submitted by the form or the API.
///
/// Missing fields deserialize to empty strings so they surface as field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterMember {
    pub name: String,
    pub email: String,
    pub phone: String,
}
