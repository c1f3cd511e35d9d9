pub mod admission_service;
pub mod fanout_service;
pub mod tickets_service;
