pub mod init;
pub mod report;
pub mod run;
pub mod validate;

/// The built-in standard catalog: 5 behavioral, 5 technical, 2 coding,
/// 5 final.
pub const STANDARD_CATALOG: &str = include_str!("../../assets/standard.toml");
