pub mod json;
pub mod product;
