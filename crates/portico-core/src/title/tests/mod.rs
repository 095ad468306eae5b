// Title reactor test module
#[cfg(test)]
mod title_tests;
