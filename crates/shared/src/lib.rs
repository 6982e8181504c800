pub mod domain;
pub mod error;
pub mod strings;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
