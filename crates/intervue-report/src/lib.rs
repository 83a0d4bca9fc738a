//! intervue-report — Report renderers.
//!
//! Formats an `InterviewReport` into downloadable text formats. Renderers
//! only read the report structure; every field round-trips as text or a
//! number.

pub mod csv;
pub mod html;

pub use csv::{render_csv, write_csv_report};
pub use html::{generate_html, write_html_report};
