//! Asynchronous implementations of core components
//!
//! This module provides the thread-safe pieces used by the async strategy:
//!
//! - **AsyncGroupLedger**: Thread-safe per-group expense storage using DashMap
//! - **BatchProcessor**: Ingests batches and builds group reports in parallel
//!
//! # Thread Safety
//!
//! The balance aggregation and settlement planning are pure functions over a
//! group's expenses, so reports of different groups are built concurrently
//! without any locking. Only the ledger is shared, and only while ingesting.

pub mod batch_processor;
pub mod ledger;

pub use batch_processor::BatchProcessor;
pub use ledger::AsyncGroupLedger;
