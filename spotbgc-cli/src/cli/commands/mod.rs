pub mod filter_blast;
pub mod hard_mask;
pub mod input_target_db;
pub mod target_db;
