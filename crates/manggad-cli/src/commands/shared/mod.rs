pub mod labels;
pub mod limit;
