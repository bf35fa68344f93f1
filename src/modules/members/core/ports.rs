// Ports the registration core needs from the outside world.
//
// The in memory adapter implements these; the handlers only see the trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::members::core::member::{Member, MemberId, NewMember};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("email already registered: {0}")]
    EmailTaken(String),
}

#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Stores `member` after every existing one and returns it with its assigned id.
    async fn append(&self, member: NewMember) -> Result<Member, StoreError>;

    async fn list_all(&self) -> Vec<Member>;

    async fn find_by_id(&self, id: MemberId) -> Option<Member>;
}
