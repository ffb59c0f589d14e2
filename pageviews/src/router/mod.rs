pub mod compare;
pub mod views;
