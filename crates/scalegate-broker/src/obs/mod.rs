//! Lightweight in-process metrics (dependency-free).
//!
//! Counters and gauges are stored as atomics behind `DashMap` and rendered by
//! the `/metrics` handler in Prometheus text format; no metrics crate is
//! pulled in for a surface this small.

pub mod metrics;
