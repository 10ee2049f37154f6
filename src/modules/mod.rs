pub mod activity;
pub mod admin;
pub mod auth;
pub mod challenge;
pub mod meta;
pub mod profile;
pub mod replacement;
