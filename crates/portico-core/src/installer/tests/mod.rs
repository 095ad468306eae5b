// Installer test modules
#[cfg(test)]
mod adapter_tests;
#[cfg(test)]
mod directive_tests;
