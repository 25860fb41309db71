//! MCP tool server for a simulated wireless network scanner.
//!
//! Tools are served from AWS Lambda behind a Bedrock `AgentCore` Gateway. Two of
//! them are schema-validated prompt flows backed by an external text-generation
//! service; the rest serve sample scanner data.

pub mod config;
pub mod flows;
pub mod generator;
pub mod handler;
pub mod http;
pub mod interceptor;
pub mod models;
pub mod sample_data;
pub mod tools;
pub mod utils;
