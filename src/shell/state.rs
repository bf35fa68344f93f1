use crate::modules::members::adapters::outbound::member_store_in_memory::InMemoryMemberStore;
use crate::modules::members::core::ports::MemberStore;
use crate::modules::members::use_cases::register_member::handler::RegisterMemberHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberStore>,
    pub register_handler: Arc<RegisterMemberHandler<InMemoryMemberStore>>,
}

impl AppState {
    /// Wires the registration handler and the read side to one shared store.
    pub fn in_memory(store: InMemoryMemberStore) -> Self {
        let store = Arc::new(store);
        Self {
            members: store.clone(),
            register_handler: Arc::new(RegisterMemberHandler::new(store)),
        }
    }
}
