pub mod app;
pub mod auth;
pub mod authority;
pub mod config;
pub mod decision;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod middleware;
pub mod routing;
pub mod tenant;
