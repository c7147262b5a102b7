//! # HTTP Core
//!
//! Request construction and response rendering for a single fetch run.

pub mod models;
pub mod services;

pub use models::{OptionBag, RequestSpec, ResponseView};
pub use services::{build, render, ReqwestTransport, Transport};
