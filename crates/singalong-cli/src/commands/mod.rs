pub mod config;
pub mod parse;
pub mod report;

pub use config::{init_config, show_config};
pub use parse::run_parse;
pub use report::run_report;
