//! Record scanner tests.

mod scanner_tests;
