// I18n test module
#[cfg(test)]
mod i18n_tests;
