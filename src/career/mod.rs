pub mod matching;
pub mod migrate;
pub mod relocate;
pub mod sandbox;

pub use matching::*;
pub use migrate::*;
pub use relocate::*;
pub use sandbox::*;
