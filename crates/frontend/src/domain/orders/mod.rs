//! Order console domain: API client, view-state store and UI components.

pub mod api;
pub mod state;
pub mod ui;
