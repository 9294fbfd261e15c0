pub mod decor;
pub mod heart;
pub mod rng;
