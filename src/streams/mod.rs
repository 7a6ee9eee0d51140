pub mod slice;
pub mod text;
