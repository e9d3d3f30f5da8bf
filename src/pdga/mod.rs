// SPDX-License-Identifier: MPL-2.0

mod client;
pub mod links;
pub mod profile;
mod types;

pub use client::{FetchError, HttpProfileSource, ProfileSource};
pub use types::{PlayerLink, ProfileRecord, ProfileRef};
