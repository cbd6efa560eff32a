//! Command implementations for wayfinder

pub mod dispatch;
pub mod distances;
pub mod generate;
pub mod load;
pub mod neighbors;
pub mod route;
