pub use wayfinder_core::format::OutputFormat;

// ValueEnum is implemented in the core crate, next to OutputFormat (orphan rule)
