#![forbid(unsafe_code)]

//! Umbrella crate re-exporting the data-preparation stack.

pub use lidarseg_core as core;
pub use lidarseg_dataset as dataset;
pub use lidarseg_filters as filters;
