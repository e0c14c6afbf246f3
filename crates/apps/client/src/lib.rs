#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod frame_source;
pub mod interfaces;
pub mod search_api;
pub mod session;
