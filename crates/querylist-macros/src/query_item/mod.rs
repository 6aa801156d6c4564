//! Implementation of the `#[derive(QueryItem)]` macro.
//!
//! Generates the `QueryItem` and `TryQueryItem` impls plus field name
//! constants from `#[query(...)]` field annotations.

mod attrs;
mod derive;

pub use derive::query_item_derive_impl;
