//! Password hashing primitives.

pub mod hasher;

pub use hasher::PasswordHasher;
