pub mod db;
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod comparison {
    pub mod selection_storage;
}
pub mod guide {
    pub mod chat_log_repository;
}
pub mod appointment {
    pub mod repository;
}
pub mod contact {
    pub mod repository;
}
