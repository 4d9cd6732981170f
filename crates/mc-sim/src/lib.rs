//! `mc-sim` — the tick loop that moves monks through their doctors.
//!
//! # Tick loop
//!
//! ```text
//! while any doctor has a waiting monk:
//!   for doctor in 1..=D:
//!     earliest = schedule.peek_earliest()
//!     if earliest ≤ now:
//!       monk = pop lowest id at earliest
//!       next = monk.itinerary.pop_next()
//!       if next: insert monk into next's schedule @ now+1
//!       else:    monk done
//!   now += 1
//! report now
//! ```
//!
//! Under the default [`AdmissionPolicy::OnePerTick`][mc_core::AdmissionPolicy]
//! each doctor admits at most one monk per tick; an eligible backlog drains
//! one monk per tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mc_schedule::load_roster_file;
//! use mc_sim::{LogObserver, SimBuilder};
//!
//! let roster = load_roster_file(Path::new("monks.txt"))?;
//! let mut sim = SimBuilder::from_roster(roster).build()?;
//! let end = sim.run(&mut LogObserver)?;
//! println!("end time = {}", end.0);
//! ```

pub mod builder;
pub mod error;
pub mod event;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use event::{Admission, VisitEvent};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use sim::{Sim, SimState};
