pub mod canon;
pub mod resolver;

pub use canon::{canon, canon_str};
pub use resolver::resolve;
