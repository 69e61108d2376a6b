pub mod components;
pub mod similarity;
