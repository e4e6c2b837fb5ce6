//! Local search operators for improving an anchored route.
//!
//! Every operator works on the free hubs between a fixed start and a fixed
//! end, and never moves either anchor.
//!
//! - [`two_opt`] — Segment reversal
//! - [`or_opt`] — Relocation of 1–3 hub segments

mod or_opt;
mod two_opt;

pub use or_opt::{or_opt_improve, route_distance};
pub use two_opt::two_opt_improve;

pub(crate) use or_opt::or_opt_pass;
pub(crate) use two_opt::two_opt_pass;
