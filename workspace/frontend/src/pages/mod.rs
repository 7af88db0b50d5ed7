pub mod dashboard;
pub mod home;
pub mod neighborhoods;
