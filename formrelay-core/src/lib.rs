//! Formrelay Core
//!
//! Core types and rules for the Formrelay lead-capture system.
//!
//! This crate contains:
//! - Domain types: submission field sets, the department/position table,
//!   attachment rules, the email grammar
//! - DTOs: the wire result shape shared between server and client

pub mod domain;
pub mod dto;
