pub mod prober;

pub use prober::HttpSourceProber;
