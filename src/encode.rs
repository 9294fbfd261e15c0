pub mod frames;
pub mod gif;
