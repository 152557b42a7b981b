pub mod db;
mod errors;
pub mod ingredient {
    pub mod entity;
    pub mod repository;
}
pub mod recipe {
    pub mod entity;
    pub mod repository;
}
pub mod relation {
    pub mod follow;
    pub mod recipe_relation;
}
pub mod tag {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
