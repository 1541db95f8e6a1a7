pub mod calculator;
pub mod status;
