pub mod json;
pub mod mock;
