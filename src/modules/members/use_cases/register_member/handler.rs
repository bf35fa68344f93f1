use std::sync::Arc;

use crate::modules::members::core::member::{Member, NewMember};
use crate::modules::members::core::ports::{MemberStore, StoreError};
use crate::modules::members::core::validation::{FieldError, ValidationResult};
use crate::modules::members::use_cases::register_member::command::RegisterMember;

pub struct RegisterMemberHandler<TStore>
where
    TStore: MemberStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RegisterMemberHandler<TStore>
where
    TStore: MemberStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Validates the command and appends the member when every field is acceptable.
    ///
    /// On rejection the store is left untouched.
    pub async fn handle(&self, command: RegisterMember) -> Result<Member, ValidationResult> {
        let new_member = match NewMember::parse(command) {
            Ok(m) => m,
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "registration rejected");
                return Err(errors);
            }
        };

        match self.store.append(new_member).await {
            Ok(member) => {
                tracing::info!(id = member.id, email = %member.email, "member registered");
                Ok(member)
            }
            Err(StoreError::EmailTaken(email)) => {
                tracing::debug!(%email, "registration rejected, email taken");
                Err(FieldError::EmailTaken.into())
            }
        }
    }
}
