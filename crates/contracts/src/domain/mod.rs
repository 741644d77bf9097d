pub mod a001_customer;
pub mod a002_service;
pub mod a003_supply;
pub mod a004_record;
pub mod a005_service_supply;
