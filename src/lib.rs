//! Agora: server-rendered blog and forum pages over Postgres.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
