pub mod entity;
pub mod tokenize;
