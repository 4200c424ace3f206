pub mod top_k;

pub use top_k::{ScanStrategy, TopKSelector, bottom_k, top_k, top_k_by, top_k_with};
