pub mod cli;
pub mod widgets;
