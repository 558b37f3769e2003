pub mod booking;
pub mod fare;
pub mod gallery;
pub mod rates;
pub mod review;
