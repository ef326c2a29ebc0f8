//! 外部リソースアクセス

pub mod dataset;
