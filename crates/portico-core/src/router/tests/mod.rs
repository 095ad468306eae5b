#[cfg(test)]
mod modules_tests;
