pub mod aliases;

pub use aliases::AliasIndex;
