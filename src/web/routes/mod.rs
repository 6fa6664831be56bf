pub mod home;
pub mod schools;
