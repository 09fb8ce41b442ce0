mod trace;

pub use trace::*;
