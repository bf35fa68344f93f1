use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::members::core::member::Member;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMember {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Member> for GqlMember {
    fn from(m: Member) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn members(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMember>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.members.list_all().await;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn member(&self, context: &Context<'_>, id: u64) -> GqlResult<Option<GqlMember>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.members.find_by_id(id).await.map(Into::into))
    }
}
