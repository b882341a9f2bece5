// Liquidity venue interface

pub mod cpmm;

pub use cpmm::*;
