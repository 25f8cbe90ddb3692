pub mod application {
    pub mod appointment {
        pub mod book;
    }
    pub mod comparison {
        pub mod build_sheet;
        pub mod clear;
        pub mod get;
        pub mod sessions;
        pub mod toggle;
    }
    pub mod contact {
        pub mod send;
    }
    pub mod guide {
        pub mod greet;
        pub mod reply;
    }
    pub mod product {
        pub mod browse;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod appointment {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod book;
        }
    }
    pub mod comparison {
        pub mod selection;
        pub mod sheet;
        pub mod storage;
        pub mod store;
        pub mod use_cases {
            pub mod build_sheet;
            pub mod clear;
            pub mod get;
            pub mod toggle;
        }
    }
    pub mod contact {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod send;
        }
    }
    pub mod guide {
        pub mod errors;
        pub mod greeting;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod greet;
            pub mod reply;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod images;
        pub mod links;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod browse;
            pub mod get_by_id;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
