pub mod job;
pub mod request;
