#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_inception,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

pub mod api;
pub mod aws;
pub mod collection;
pub mod face_index;
pub mod object_store;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod utils;
