//! Tooling primitives for deterministic game AI.
//!
//! This crate is intentionally lightweight and engine-agnostic: planners, executors and the
//! strategy layer emit small trace events, and the host decides where they go.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{emit, NullTraceSink, TraceEvent, TraceLog, TraceSink, TracingSink};
