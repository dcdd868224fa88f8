mod builder;


pub use builder::{Statement, build_csv_query};
