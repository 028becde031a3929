pub mod check;
pub mod games_file;
