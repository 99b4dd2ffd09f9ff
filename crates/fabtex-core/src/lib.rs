pub mod config;
pub mod logging;

pub mod catalog;
pub mod fetch;
pub mod http;
pub mod material;
pub mod materialize;
pub mod names;
pub mod paths;
pub mod retry;
pub mod storage;
