//! `mc-schedule` — monk itineraries, doctor schedules, and roster loading.
//!
//! # Crate layout
//!
//! | Module              | Contents                                               |
//! |---------------------|--------------------------------------------------------|
//! | [`itinerary`]       | `Itinerary`, `Monk`, `MonkPlan`, `Placement`, `Advance` |
//! | [`doctor_schedule`] | `DoctorSchedule` (`BTreeMap<Tick, BTreeMap<MonkId, _>>`) |
//! | [`clinic`]          | `Clinic` — bounds-checked schedules for doctors `1..=D` |
//! | [`loader`]          | `Roster`, text and CSV loaders                          |
//! | [`synth`]           | `SyntheticConfig`, `synthetic_roster`                   |
//! | [`error`]           | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Monk lifecycle (summary)
//!
//! ```text
//! MonkPlan { arrival, [d1, d2, d3] }
//!   └─ into_placement ─→ d1 schedule @ arrival, itinerary = [d2, d3]
//! admitted by d1 @ t ─→ d2 schedule @ t+1,      itinerary = [d3]
//! admitted by d2 @ u ─→ d3 schedule @ u+1,      itinerary = []
//! admitted by d3 @ v ─→ done, dropped
//! ```

pub mod clinic;
pub mod doctor_schedule;
pub mod error;
pub mod itinerary;
pub mod loader;
pub mod synth;


pub use clinic::Clinic;
pub use doctor_schedule::DoctorSchedule;
pub use error::{ScheduleError, ScheduleResult};
pub use itinerary::{Advance, Itinerary, Monk, MonkPlan, Placement};
pub use loader::{Roster, load_roster_csv, load_roster_file, load_roster_reader, load_roster_text};
pub use synth::{SyntheticConfig, synthetic_roster};
