//! Password service API client.

mod client;
mod dto;

pub use client::{DEFAULT_API_BASE, DEFAULT_TIMEOUT, HttpPasswordApi};
