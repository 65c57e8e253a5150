pub mod login;
pub mod pages;
pub mod pictures;
pub mod register;
