//! End-to-end tests driving the real `iron` binary through `assert_cmd`.

mod cli_tests;
mod compilation_tests;
