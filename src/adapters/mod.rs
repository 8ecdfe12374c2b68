//! Infrastructure adapters. Implement outbound ports.
//!
//! SendGrid, filesystem, terminal UI. Map errors to DomainError.

pub mod email;
pub mod persistence;
pub mod ui;
