mod classifier;
mod fetcher;

pub use classifier::*;
pub use fetcher::*;
