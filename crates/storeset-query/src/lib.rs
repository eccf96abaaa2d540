pub mod classify;
pub mod collate;
pub mod coverage;
pub mod input;
pub mod report;

pub use classify::{classify, Classification};
pub use collate::{compare_names, fold_name};
pub use coverage::{select_outlets, Outlet};
pub use input::{parse_query_input, ParsedInput};
pub use report::{run_query, QueryReport};
