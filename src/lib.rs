//! galera-healthcheck - report whether a Galera cluster node should receive traffic
//!
//! The core is [`health::HealthChecker`], which reads a node's wsrep status
//! through a [`status::StatusSource`] and reduces it to a verdict plus
//! diagnostic messages. The remaining modules serve that verdict over HTTP
//! and on the command line.

pub mod api;
pub mod cli;
pub mod config;
pub mod health;
pub mod logging;
pub mod pidfile;
pub mod status;
