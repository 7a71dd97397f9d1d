//! Benchmarks for the deferred-compaction storage engine
