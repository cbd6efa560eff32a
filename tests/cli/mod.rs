mod distances;
mod errors;
mod generate;
pub mod support;
