pub(crate) mod bounds;
pub mod error;
pub mod summand;
