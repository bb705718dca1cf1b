pub mod call;
pub mod runtime;
