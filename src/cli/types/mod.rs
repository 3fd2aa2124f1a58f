//! Type-safe wrappers for sweepstake CLI arguments.

pub mod overrides;
pub mod season;


pub use overrides::TeamOverride;
pub use season::SeasonLabel;
