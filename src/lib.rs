pub mod demo;
pub mod engine;
