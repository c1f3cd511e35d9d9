pub mod application;
pub mod domain;
pub mod dto;
pub mod error;
pub mod gateway;
pub mod repository;
pub mod routing;
pub mod service;
