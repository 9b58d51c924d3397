pub mod hint;
pub mod scoring;
