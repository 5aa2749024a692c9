mod client;

pub use client::{WaqiClient, DEFAULT_BASE_URL};
