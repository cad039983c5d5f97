//! Document parsing modules
//!
//! This module contains the docx-rs walkers used by the loader.

pub(crate) mod formatting;
pub(crate) mod table;
