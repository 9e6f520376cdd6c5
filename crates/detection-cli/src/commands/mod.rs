pub mod canonicalize;
pub mod inspect;
pub mod validate;
