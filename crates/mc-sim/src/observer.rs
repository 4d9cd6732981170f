//! Simulation observer trait for diagnostics and data collection.

use mc_core::Tick;

use crate::VisitEvent;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — admission counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl SimObserver for Counter {
///     fn on_tick_end(&mut self, _tick: Tick, admitted: usize) {
///         self.0 += admitted;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any doctor is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every admission, and once for every doctor that admitted
    /// nobody this tick.
    fn on_visit(&mut self, _event: &VisitEvent) {}

    /// Called at the end of each tick with the number of admissions made.
    fn on_tick_end(&mut self, _tick: Tick, _admitted: usize) {}

    /// Called once when every schedule is empty.  `final_tick` is the
    /// reported elapsed time.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that writes the visit stream to the `log` facade.
///
/// Per-visit lines are `debug`; the final elapsed time is `info`.
pub struct LogObserver;

impl SimObserver for LogObserver {
    fn on_visit(&mut self, event: &VisitEvent) {
        let (doctor, now) = (event.doctor, event.tick);
        log::debug!("processing {doctor} at {now}");

        let Some(earliest) = event.earliest else {
            log::debug!("{doctor} has no waiting monks");
            return;
        };
        log::debug!("{doctor} earliest arrival is {earliest}");

        if let Some(admission) = &event.admission {
            match admission.forwarded_to {
                Some(next) => log::debug!("forwarding {} to {next} for {}", admission.monk, now.next()),
                None => log::debug!("{} finished at {doctor}", admission.monk),
            }
            if admission.slot_cleared {
                log::debug!("erasing slot {} from {doctor}", admission.slot);
            }
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::info!("all schedules empty; end time = {}", final_tick.0);
    }
}

/// Drive two observers from one run, `.0` first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_visit(&mut self, event: &VisitEvent) {
        self.0.on_visit(event);
        self.1.on_visit(event);
    }

    fn on_tick_end(&mut self, tick: Tick, admitted: usize) {
        self.0.on_tick_end(tick, admitted);
        self.1.on_tick_end(tick, admitted);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
