pub mod a001_category;
pub mod a002_product;
pub mod a003_supplier;
pub mod a004_sale;

/// Primary key of every SCD record
pub type EntityId = i64;
