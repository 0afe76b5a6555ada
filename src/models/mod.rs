pub mod error;
pub mod score;
pub mod snapshot;

pub use error::*;
pub use score::*;
pub use snapshot::*;
