//! Extraction Tests
//!
//! End-to-end scenario harvesting over realistic source trees.
