pub mod converter;
pub mod expression;
pub mod vacation;
