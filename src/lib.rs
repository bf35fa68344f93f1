pub mod shared {
    pub mod config;
}

pub mod modules {
    pub mod members {
        pub mod core {
            pub mod member;
            pub mod ports;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod register_member {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod form;
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_members {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod registration_page;
            }
            pub mod outbound {
                pub mod member_store_in_memory;
            }
        }
    }
}

pub mod shell;
