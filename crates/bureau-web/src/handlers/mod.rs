//! HTTP request handlers

pub mod api;
pub mod export;
pub mod health;
pub mod pages;
