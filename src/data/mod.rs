pub mod loader;

pub use loader::{Table, load};
