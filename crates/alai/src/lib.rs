//! Alai presentation API client backend for webpage-to-deck conversion.
//!
//! Covers the password-grant auth flow, presentation/slide creation, and
//! share-link generation against the Alai backend.

pub mod client;
pub mod session;

pub use client::AlaiClient;
pub use session::Session;
