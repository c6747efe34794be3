//! Сущности sea-orm витрины SSH-аккаунтов.

pub mod servers;
pub mod ssh_accounts;
