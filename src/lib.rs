pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod panel;
pub mod provider;
pub mod scorer;
// cmd and reports are binary modules, see main.rs.
