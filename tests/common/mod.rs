//! Common test utilities and infrastructure

pub mod mock_server;
pub mod raw_server;
