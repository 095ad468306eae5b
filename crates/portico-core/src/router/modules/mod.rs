//! Built-in route modules of the admin shell, in registration order.
pub mod report_generator;
pub mod vben;
pub mod word_generator;

use crate::kernel::constants::ConstantsRegistry;
use crate::kernel::error::Result;
use crate::router::module::RouteModule;

/// Every built-in module. Fails if a module references a constant the registry lacks.
pub fn all(constants: &ConstantsRegistry) -> Result<Vec<RouteModule>> {
    Ok(vec![
        word_generator::module(),
        report_generator::module(),
        vben::module(constants)?,
    ])
}
