pub mod category;
pub mod chart;
pub mod config;
pub mod error;
pub mod fetch;
pub mod infra;
pub mod lookup;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod records;
pub mod services;
