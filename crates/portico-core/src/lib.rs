// Declare the subsystems of the admin shell core
pub mod config;
pub mod i18n;
pub mod installer;
pub mod kernel;
pub mod router;
pub mod signal;
pub mod store;
pub mod title;

// Re-export key public types/traits for easier use by the binary
pub use kernel::error::Error as KernelError;
pub use kernel::{Bootstrapped, Bootstrapper, Collaborators, ConstantsRegistry};
pub use kernel::instance::AppInstance;
pub use router::{RouteModule, RouteNode, RouteTable, Router};
pub use signal::Signal;
pub use title::{TitleReactor, TitleSink};
