//! NRF Gourmet CLI
//!
//! gourmet_common 의 Dashboard를 터미널에서 구동한다.

pub mod app;
pub mod browse;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
