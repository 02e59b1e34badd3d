// Core modules implementing tsconfig decoding, alias extraction, and error modeling.
pub mod alias;
pub mod error;
pub mod plugin;
pub mod report;
pub mod tsconfig;
