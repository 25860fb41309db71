//! Schema generator for Amazon Bedrock Agent tools.
//!
//! Writes `tool_schema.json` with the name, description and input/output
//! schemas of every tool served by the Lambda.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use wireless_scanner_mcp::tools::definitions::tool_definitions;

fn main() -> Result<()> {
    let tools = tool_definitions();

    let schemas: Vec<Value> = tools.iter().map(|tool| tool.to_json()).collect();
    let json = serde_json::to_string_pretty(&schemas).context("Failed to serialize schema")?;
    fs::write("tool_schema.json", json).context("Failed to write tool_schema.json")?;

    println!("✅ Generated tool_schema.json with {} tool(s)", tools.len());
    Ok(())
}
