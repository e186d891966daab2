pub mod answer;
pub mod question;
pub mod record;
pub mod rule;
