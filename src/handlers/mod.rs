//! HTTP handlers

pub mod governor;
pub mod health;
pub mod investigator;
pub mod screener;
