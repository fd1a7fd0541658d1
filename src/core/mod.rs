pub mod calculator;
pub mod check;
pub mod editor;
pub mod grid;
pub mod logic;
pub mod vcs;
