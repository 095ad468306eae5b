// Config test module
#[cfg(test)]
mod config_tests;
