//! HTTP adapters for the remote photo service.

mod client;
mod dto;

pub use client::{CatalogConfig, HttpPhotoCatalog};
