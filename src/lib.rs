//! worldctl: control client for headless world hosts
//!
//! Commands resolve a running world by id or name against the host's REST API
//! and describe it, either as JSON or as a tab-separated summary line.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
