// Library surface for headless/integration tests and reuse.
// The ui module stays bin-only; it renders the App type owned by main.
pub mod config;
pub mod diff;
pub mod feedback;
pub mod metrics;
pub mod runtime;
pub mod sentences;
pub mod session;
