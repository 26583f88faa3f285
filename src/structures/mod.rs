pub mod poly;
pub mod text;
