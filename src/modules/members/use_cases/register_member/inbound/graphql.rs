use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};

use crate::modules::members::use_cases::list_members::inbound::graphql::GqlMember;
use crate::modules::members::use_cases::register_member::command::RegisterMember;
use crate::shell::state::AppState;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Field errors are reported in the error extensions, keyed by field name.
    async fn register_member(
        &self,
        context: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> GqlResult<GqlMember> {
        let state = context.data_unchecked::<AppState>();

        let command = RegisterMember { name, email, phone };

        state
            .register_handler
            .handle(command)
            .await
            .map(Into::into)
            .map_err(|errors| {
                async_graphql::Error::new("registration rejected").extend_with(|_, ext| {
                    for (field, error) in errors.iter() {
                        ext.set(field.as_str(), error.to_string());
                    }
                })
            })
    }
}
