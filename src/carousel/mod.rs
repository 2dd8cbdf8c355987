pub(crate) mod config;
pub(crate) mod schedule;
pub(crate) mod state;
