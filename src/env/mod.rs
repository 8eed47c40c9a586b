pub mod probe;
pub mod user_id;
