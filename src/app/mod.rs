pub mod display;
pub mod session;
