// Skill-to-career-track recommendation.
// Pure and synchronous: no I/O, no shared mutable state. The track table is
// built once at startup and only read afterwards.

pub mod catalog;
pub mod classifier;
pub mod handlers;
pub mod tracks;
