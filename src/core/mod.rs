pub mod session;
pub mod suggestions;
