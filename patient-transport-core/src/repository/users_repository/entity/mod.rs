mod user_find_entity;
mod user_insert_entity;

pub use user_find_entity::*;
pub use user_insert_entity::*;
