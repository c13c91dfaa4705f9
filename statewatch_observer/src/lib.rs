pub use logging::*;
pub use observer::*;
pub use reactors::*;
pub use subject::*;

pub mod error;
mod logging;
mod observer;
mod reactors;
mod subject;
