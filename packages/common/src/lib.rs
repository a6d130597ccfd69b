pub mod asset;
pub mod storage;
