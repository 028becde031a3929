pub mod check;
pub mod draws;
pub mod games;
mod validation;
