//! YouTube Partner Core Library
//! Typed client for the youtubePartner v1 (Content ID) API: call-site table,
//! request execution, authentication and media upload

pub mod api;
pub mod client;
pub mod config;
pub mod credentials;
pub mod discovery;
pub mod oauth;
