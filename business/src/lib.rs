pub mod application {
    pub mod ingredient {
        pub mod get_all;
        pub mod get_by_id;
        pub mod import;
    }
    pub mod recipe {
        pub mod content;
        pub mod create;
        pub mod delete;
        pub mod details;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod relation {
        pub mod add;
        pub mod remove;
    }
    pub mod shopping_list {
        pub mod aggregate;
    }
    pub mod tag {
        pub mod get_all;
        pub mod get_by_id;
        pub mod seed;
    }
    pub mod user {
        pub mod get_all;
        pub mod get_by_id;
        pub mod subscriptions;
        pub mod upsert;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod pagination;
        pub mod value_objects;
    }
    pub mod ingredient {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod search;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod import;
        }
    }
    pub mod tag {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod seed;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod subscriptions;
            pub mod upsert;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod filter;
        pub mod image;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod relation {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod remove;
        }
    }
    pub mod shopping_list {
        pub mod aggregator;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod aggregate;
        }
    }
}

#[cfg(test)]
pub mod test_support;
