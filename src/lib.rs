pub mod config;

pub mod modules {
    pub mod todos {
        pub mod core {
            pub mod commands;
            pub mod ports;
            pub mod todo;
        }
        pub mod use_cases {
            pub mod create_todo {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_all_todos {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_todos {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_todo {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_todo {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_todo {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod todo_store_in_memory;
            }
        }
    }
}

pub mod shell;
