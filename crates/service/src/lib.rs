//! Service layer providing catalog CRUD operations on top of models.
//! - Translates domain operations into single parameterized statements.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Raises typed errors on "not found" and write failures.

pub mod albums_service;
pub mod errors;
pub mod songs_service;
#[cfg(test)]
pub mod test_support;
