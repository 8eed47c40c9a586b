pub mod bid;
pub mod request;
