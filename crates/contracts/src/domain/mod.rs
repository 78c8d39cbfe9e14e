pub mod a001_asset;
pub mod a002_bill;
pub mod common;
