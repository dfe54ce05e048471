pub mod navdata;
pub mod prune;
pub mod relink;
pub mod replace;

pub use navdata::*;
pub use prune::*;
pub use relink::*;
pub use replace::*;
