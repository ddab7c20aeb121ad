pub mod paginator;
pub mod session;
pub mod stats;
