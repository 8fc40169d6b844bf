pub mod clock;
pub mod date;
