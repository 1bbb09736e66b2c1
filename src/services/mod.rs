pub mod booking;
pub mod catalog;
pub mod contact;
pub mod sessions;
pub mod submission;
