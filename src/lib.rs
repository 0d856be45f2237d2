pub mod shared {
    pub mod core {
        pub mod clock;
    }
}

pub mod modules {
    pub mod trackings {
        pub mod core {
            pub mod errors;
            pub mod ports;
            pub mod tracking;
        }
        pub mod use_cases {
            pub mod create_tracking {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_trackings_by_shipment {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod tracking_store_in_memory;
            }
        }
    }
}

pub mod shell;
