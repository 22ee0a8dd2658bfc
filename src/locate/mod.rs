mod client;
mod domain;
mod observer;

pub use client::{LocateClientError, new_client};
pub use observer::observe;
