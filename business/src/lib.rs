pub mod application {
    pub mod cart {
        pub mod add_to_cart;
    }
    pub mod invoice {
        pub mod delete;
        pub mod search;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod export_csv;
        pub mod get_all;
        pub mod print_catalog;
        pub mod search;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod add_to_cart;
        }
    }
    pub mod invoice {
        pub mod errors;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod delete;
            pub mod search;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod export;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod export_csv;
            pub mod get_all;
            pub mod print_catalog;
            pub mod search;
            pub mod update;
        }
    }
}
