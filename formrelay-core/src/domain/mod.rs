//! Domain types and validation rules
//!
//! Business entities shared by the server (authoritative validation) and the
//! client (courtesy validation): the careers application, the contact
//! enquiry, the department/position table, attachment rules, and the email
//! grammar. Both sides must agree on these, so they live here.

pub mod application;
pub mod attachment;
pub mod department;
pub mod email;
pub mod enquiry;
pub mod text;
