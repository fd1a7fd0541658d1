pub mod cat;
pub mod check;
pub mod commit;
pub mod config;
pub mod edit;
pub mod grid;
pub mod summary;
