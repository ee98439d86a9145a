//! RetroStack: historical tech stack lookup.
//!
//! Answers "what runtime, package manager, and package versions were current
//! for this language/framework in a given year?" over two surfaces: a JSON
//! HTTP API and an MCP stdio server exposing one tool.

pub mod api;
pub mod mcp;
pub mod models;
pub mod registry;
pub mod stack;
