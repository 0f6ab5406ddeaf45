pub mod calculator;
pub mod payload;
pub mod sheet;
