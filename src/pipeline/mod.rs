pub mod builder;
pub mod oracle;
pub mod runtime;
pub mod traits;
