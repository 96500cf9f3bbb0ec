// ── Desnative Atoms Layer ──────────────────────────────────────────────────
// Pure constants, data types and the error enum. No I/O, no side effects.
// Nothing here may import from history/, transfer, updates or config.

pub mod constants;
pub mod error;
pub mod types;
