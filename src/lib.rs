pub mod config;

pub mod shared {
    pub mod infrastructure {
        pub mod notifier;
        pub mod persistent_slot;
    }
}

pub mod modules {
    pub mod cart {
        pub mod errors;
        pub mod store;
        pub mod core {
            pub mod cart;
            pub mod decision;
            pub mod product;
        }
        pub mod use_cases {
            pub mod add_product {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod remove_product {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_product_amount {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_cart {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql_error;
                pub mod http_response;
            }
            pub mod outbound {
                pub mod catalog;
                pub mod catalog_http;
                pub mod catalog_in_memory;
                pub mod toast;
            }
        }
    }
}

pub mod shell;
