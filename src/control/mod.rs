//! The cooperative scheduling core.
//!
//! Four independently-timed controllers share one execution thread.  Each
//! tick the [`AppService`](crate::app::service::AppService) snapshots the
//! sensors once, then runs every controller's trigger check in a fixed
//! order:
//!
//! ```text
//!  Clock ──▶ SensorSnapshot ──▶ misting ─▶ ph ─▶ reservoir ─▶ rotation
//! ```
//!
//! A controller whose timer has not elapsed returns immediately; nothing
//! here blocks across ticks.  The two documented exceptions — the pH
//! mix-settle hold and the rotation step-completion poll — are bounded,
//! short, and confined to their own controller.
//!
//! All elapsed-time checks go through [`crate::clock`] and stay correct
//! across `u32` clock rollover.

pub mod context;
pub mod misting;
pub mod ph;
pub mod reservoir;
pub mod rotation;

// ═══════════════════════════════════════════════════════════════
//  Shared test fixtures for the controller unit tests
// ═══════════════════════════════════════════════════════════════
