//! Бизнес-логика витрины.

pub mod account_service;
pub mod pricing;
pub mod store;
pub mod validation;
