//! HTTP chat backend.
//!
//! Implements `ChatBackend` against a JSON service exposing
//! `POST /chat`, `POST /clear_history` and `GET /`.

mod api;
mod client;

pub use client::HttpBackend;
