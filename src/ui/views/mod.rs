pub mod check;
pub mod outline;
pub mod output;
