pub mod auth;
pub mod form;
pub mod health;
pub mod theme;
