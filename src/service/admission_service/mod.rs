mod admission_service;
mod admission_service_impl;

pub use admission_service::*;
pub use admission_service_impl::*;
