pub mod challenge;
pub mod history;
pub mod quiz;
pub mod result;
