mod demo;

pub use demo::cmd_simulate;
pub use demo::cmd_walkthrough;
