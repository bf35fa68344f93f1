// Process local member store.
//
// Append only: members are kept in insertion order and never removed. The email
// uniqueness check and the insert share one write lock.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::members::core::member::{Member, MemberId, NewMember};
use crate::modules::members::core::ports::{MemberStore, StoreError};

#[derive(Default)]
pub struct InMemoryMemberStore {
    members: RwLock<Vec<Member>>,
}

impl InMemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the single pre-registered member shown on a fresh page.
    pub fn seeded() -> Self {
        Self {
            members: RwLock::new(vec![NewMember::seed().into_member(0)]),
        }
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn append(&self, member: NewMember) -> Result<Member, StoreError> {
        let mut guard = self.members.write().await;
        if guard.iter().any(|m| m.email == member.email()) {
            return Err(StoreError::EmailTaken(member.email().to_string()));
        }
        let id = guard.last().map_or(0, |last| last.id + 1);
        let member = member.into_member(id);
        guard.push(member.clone());
        Ok(member)
    }

    async fn list_all(&self) -> Vec<Member> {
        self.members.read().await.clone()
    }

    async fn find_by_id(&self, id: MemberId) -> Option<Member> {
        self.members
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }
}
