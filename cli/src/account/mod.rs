//! Account module.
//!
//! This module contains everything related to the declarative CalDAV
//! account: arguments and handlers.

pub mod account_args;
pub mod account_handlers;
