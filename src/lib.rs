pub mod algorithm;
pub mod align;
pub mod input;
pub mod loci;
pub mod report;
