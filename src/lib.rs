pub mod modules {
    pub mod events {
        pub mod core {
            pub mod errors;
            pub mod event;
            pub mod event_list;
            pub mod title;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod welcome {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
            pub mod outbound {
                pub mod event_store;
                pub mod event_store_in_memory;
            }
        }
    }
}

pub mod shell;
