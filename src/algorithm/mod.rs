pub mod acquisition;
pub mod order;
