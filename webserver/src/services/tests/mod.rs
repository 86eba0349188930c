//! Service tests for webserver
//!
//! Storage tests run against real files in temporary directories.
