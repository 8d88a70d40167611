//! Types which cut across modules.

pub mod err;
