mod summary;
mod tables;

pub use summary::{print_header, print_status, print_trend};
pub use tables::{print_acceptable_table, print_issue_table};
