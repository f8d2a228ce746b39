pub mod add;
pub mod adjust_sold;
pub mod clear;
pub mod remove;
