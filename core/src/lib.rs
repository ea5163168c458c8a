pub mod ignore;
pub mod mapper;
pub mod report;
pub mod tokens;

pub use mapper::{MapOptions, MapResult, TokenCount, generate_file_map};
