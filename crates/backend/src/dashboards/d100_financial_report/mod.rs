pub mod chart;
pub mod error;
pub mod expenses;
pub mod period;
pub mod repository;
pub mod revenue;
pub mod service;
pub mod store;
