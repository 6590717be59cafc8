pub mod call;
pub mod contact;
pub mod country;
pub mod nav;
