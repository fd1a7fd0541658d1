pub mod aggregate;
pub mod balance;
pub mod timeline;
