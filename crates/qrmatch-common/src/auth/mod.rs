//! Authentication utilities

mod password;
mod token;

pub use password::{hash_password, verify_dummy_password, verify_password};
pub use token::{generate_token, hash_token, IssuedToken, TOKEN_BYTES};
