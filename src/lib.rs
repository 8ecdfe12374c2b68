//! petrox-mailer: Petrox Assessment Platform update mailer with Hexagonal Architecture.
//!
//! The `domain::dashboard` module doubles as the platform's typed dashboard
//! configuration (navigation, demo tables, loading skeleton).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
