pub mod actions;
pub mod health;
pub mod tokenlist;
pub mod tokens;
