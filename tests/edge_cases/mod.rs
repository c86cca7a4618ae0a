//! Edge Cases and Error Handling Tests
//!
//! Tests for unusual inputs and error conditions:
//! - Empty and missing directories
//! - Syntax errors and malformed code
//! - Near-miss marker calls
