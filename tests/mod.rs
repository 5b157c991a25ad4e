pub mod locale;
pub mod ops;
pub mod types;
pub mod validation;
