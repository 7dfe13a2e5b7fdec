//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate for any binary built on this framework.
//!
//! ## What Gets Traced
//!
//! - **Converter registration**: which kind each converter took over (`debug`)
//! - **Render actor lifecycle**: startup, shutdown, and documents rendered
//! - **Requests**: render/parse requests with tree depth and document size
//! - **Edge cases**: empty relations and non-object state (`trace`), depth
//!   guard trips and refused writes (`warn`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Per-request detail
//! RUST_LOG=debug cargo run
//!
//! # Writer edge cases too
//! RUST_LOG=hal_framework=trace cargo run
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
