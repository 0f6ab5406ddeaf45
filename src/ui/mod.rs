pub mod labels;
pub mod messages;
