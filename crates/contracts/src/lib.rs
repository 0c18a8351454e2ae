//! Wire contracts shared between the SCD admin panel and its REST backend.

pub mod domain;
pub mod shared;
pub mod system;
