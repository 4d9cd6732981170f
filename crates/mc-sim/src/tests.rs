//! Integration tests for mc-sim.

use std::collections::BTreeMap;

use mc_core::{AdmissionPolicy, DoctorId, MonkId, SimConfig, Tick};
use mc_schedule::{MonkPlan, Roster, SyntheticConfig, synthetic_roster};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, SimState, VisitEvent};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn plan(arrival: u64, stops: &[u32]) -> MonkPlan {
    MonkPlan::new(Tick(arrival), stops.iter().copied().map(DoctorId).collect())
}

/// Observer that keeps everything it is told.
#[derive(Default)]
struct Recorder {
    events:      Vec<VisitEvent>,
    tick_starts: Vec<Tick>,
    tick_ends:   Vec<(Tick, usize)>,
    end:         Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.tick_starts.push(tick);
    }
    fn on_visit(&mut self, event: &VisitEvent) {
        self.events.push(event.clone());
    }
    fn on_tick_end(&mut self, tick: Tick, admitted: usize) {
        self.tick_ends.push((tick, admitted));
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.end = Some(final_tick);
    }
}

impl Recorder {
    /// `(tick, doctor, monk)` for every admission, in emission order.
    fn admissions(&self) -> Vec<(Tick, DoctorId, MonkId)> {
        self.events
            .iter()
            .filter_map(|e| e.admission.as_ref().map(|a| (e.tick, e.doctor, a.monk)))
            .collect()
    }

    /// Tick at which `monk` was admitted by each doctor, in order.
    fn visits_of(&self, monk: MonkId) -> Vec<(Tick, DoctorId)> {
        self.admissions()
            .into_iter()
            .filter(|&(_, _, m)| m == monk)
            .map(|(t, d, _)| (t, d))
            .collect()
    }
}

fn run(doctors: usize, plans: Vec<MonkPlan>) -> (Tick, Recorder) {
    let mut sim = SimBuilder::new(doctors, plans).build().unwrap();
    let mut rec = Recorder::default();
    let end = sim.run(&mut rec).unwrap();
    (end, rec)
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn places_monks_at_first_doctor_and_arrival() {
        let sim = SimBuilder::new(3, vec![plan(4, &[2, 3]), plan(0, &[3])]).build().unwrap();
        let d2 = sim.clinic.schedule(DoctorId(2)).unwrap();
        assert_eq!(d2.peek_earliest(), Some(Tick(4)));
        assert_eq!(sim.clinic.schedule(DoctorId(3)).unwrap().peek_earliest(), Some(Tick(0)));
        assert!(sim.clinic.schedule(DoctorId(1)).unwrap().is_empty());
        assert_eq!(sim.waiting(), 2);
        assert_eq!(sim.state(), SimState::Running);
    }

    #[test]
    fn empty_plan_completes_immediately() {
        let sim = SimBuilder::new(1, vec![plan(0, &[]), plan(0, &[1])]).build().unwrap();
        assert_eq!(sim.completed(), 1);
        assert_eq!(sim.waiting(), 1);
    }

    #[test]
    fn out_of_range_first_doctor_errors() {
        let result = SimBuilder::new(2, vec![plan(0, &[3])]).build();
        assert!(result.err().is_some_and(|e| e.is_invalid_doctor()));
    }

    #[test]
    fn doctor_zero_errors() {
        let result = SimBuilder::new(2, vec![plan(0, &[0])]).build();
        assert!(result.err().is_some_and(|e| e.is_invalid_doctor()));
    }

    #[test]
    fn zero_tick_limit_rejected() {
        let result = SimBuilder::new(1, vec![plan(0, &[1])]).max_ticks(0).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn from_roster_uses_doctor_count() {
        let roster = Roster::new(2, vec![plan(0, &[2])]);
        let sim = SimBuilder::from_roster(roster).build().unwrap();
        assert_eq!(sim.clinic.doctor_count(), 2);
    }
}

// ── Worked examples ───────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn single_monk_two_doctors() {
        let (end, rec) = run(2, vec![plan(0, &[1, 2])]);
        assert_eq!(end, Tick(2));
        assert_eq!(
            rec.admissions(),
            vec![(Tick(0), DoctorId(1), MonkId(1)), (Tick(1), DoctorId(2), MonkId(1))]
        );
        let first = rec.events.iter().find(|e| e.admission.is_some()).unwrap();
        assert_eq!(first.admission.as_ref().unwrap().forwarded_to, Some(DoctorId(2)));
    }

    #[test]
    fn two_monks_same_doctor_drain_one_per_tick() {
        let (end, rec) = run(1, vec![plan(0, &[1]), plan(0, &[1])]);
        assert_eq!(end, Tick(2));
        assert_eq!(
            rec.admissions(),
            vec![(Tick(0), DoctorId(1), MonkId(1)), (Tick(1), DoctorId(1), MonkId(2))]
        );
    }

    #[test]
    fn drain_eligible_admits_backlog_in_one_tick() {
        let mut sim = SimBuilder::new(1, vec![plan(0, &[1]), plan(0, &[1])])
            .admission(AdmissionPolicy::DrainEligible)
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        assert_eq!(sim.run(&mut rec).unwrap(), Tick(1));
        assert_eq!(
            rec.admissions(),
            vec![(Tick(0), DoctorId(1), MonkId(1)), (Tick(0), DoctorId(1), MonkId(2))]
        );
    }

    #[test]
    fn empty_population_finishes_at_zero() {
        let (end, rec) = run(3, vec![]);
        assert_eq!(end, Tick(0));
        assert_eq!(rec.end, Some(Tick(0)));
        assert!(rec.tick_starts.is_empty());
    }

    #[test]
    fn only_empty_plans_finish_at_zero() {
        let (end, rec) = run(1, vec![plan(3, &[]), plan(0, &[])]);
        assert_eq!(end, Tick(0));
        assert!(rec.events.is_empty());
    }

    #[test]
    fn future_arrival_waits() {
        let (end, rec) = run(1, vec![plan(3, &[1])]);
        assert_eq!(end, Tick(4));
        assert_eq!(rec.admissions(), vec![(Tick(3), DoctorId(1), MonkId(1))]);
        let waiting: Vec<Tick> = rec.events.iter().filter(|e| e.not_arrived()).map(|e| e.tick).collect();
        assert_eq!(waiting, vec![Tick(0), Tick(1), Tick(2)]);
    }

    #[test]
    fn forward_to_lower_doctor_seen_next_tick() {
        let (end, rec) = run(2, vec![plan(0, &[2, 1])]);
        assert_eq!(end, Tick(2));
        assert_eq!(rec.visits_of(MonkId(1)), vec![(Tick(0), DoctorId(2)), (Tick(1), DoctorId(1))]);
    }

    #[test]
    fn forward_to_higher_doctor_still_waits_a_tick() {
        // Doctor 2 is processed after doctor 1 in tick 0, but the monk is
        // keyed at tick 1.
        let (_, rec) = run(2, vec![plan(0, &[1, 2])]);
        let d2_tick0 = rec.events.iter().find(|e| e.doctor == DoctorId(2) && e.tick == Tick(0)).unwrap();
        assert!(d2_tick0.not_arrived());
        assert_eq!(d2_tick0.earliest, Some(Tick(1)));
    }

    #[test]
    fn repeated_doctor_is_visited_on_consecutive_ticks() {
        let (end, rec) = run(1, vec![plan(0, &[1, 1, 1])]);
        assert_eq!(end, Tick(3));
        assert_eq!(
            rec.visits_of(MonkId(1)),
            vec![(Tick(0), DoctorId(1)), (Tick(1), DoctorId(1)), (Tick(2), DoctorId(1))]
        );
    }

    #[test]
    fn lower_id_wins_shared_slot_after_forwarding() {
        // Monk 2 is forwarded into doctor 1's tick-1 slot, where monk 1 is
        // already due.
        let (end, rec) = run(2, vec![plan(1, &[1]), plan(0, &[2, 1])]);
        assert_eq!(end, Tick(3));
        assert_eq!(rec.visits_of(MonkId(1)), vec![(Tick(1), DoctorId(1))]);
        assert_eq!(rec.visits_of(MonkId(2)), vec![(Tick(0), DoctorId(2)), (Tick(2), DoctorId(1))]);
    }

    #[test]
    fn earlier_slot_beats_lower_id() {
        let (end, rec) = run(1, vec![plan(1, &[1]), plan(0, &[1]), plan(0, &[1])]);
        assert_eq!(end, Tick(3));
        let order: Vec<u32> = rec.admissions().iter().map(|&(_, _, m)| m.0).collect();
        assert_eq!(order, vec![2, 3, 1]);
    }

    #[test]
    fn slot_cleared_reported_on_last_monk() {
        let (_, rec) = run(1, vec![plan(0, &[1]), plan(0, &[1])]);
        let cleared: Vec<bool> = rec
            .events
            .iter()
            .filter_map(|e| e.admission.as_ref().map(|a| a.slot_cleared))
            .collect();
        assert_eq!(cleared, vec![false, true]);
    }

    #[test]
    fn invalid_downstream_doctor_fails_at_forwarding() {
        let mut sim = SimBuilder::new(2, vec![plan(0, &[1, 5])]).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(err.is_invalid_doctor(), "{err}");
    }

    #[test]
    fn start_tick_offsets_the_clock() {
        let config = SimConfig { start_tick: Tick(5), ..SimConfig::default() };
        let mut sim = SimBuilder::new(1, vec![plan(0, &[1])]).config(config).build().unwrap();
        let mut rec = Recorder::default();
        assert_eq!(sim.run(&mut rec).unwrap(), Tick(6));
        assert_eq!(rec.admissions(), vec![(Tick(5), DoctorId(1), MonkId(1))]);
    }
}

// ── Stepping, state, and limits ───────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use super::*;

    #[test]
    fn step_advances_clock_by_one() {
        let mut sim = SimBuilder::new(1, vec![plan(0, &[1]), plan(0, &[1])]).build().unwrap();
        assert_eq!(sim.step(&mut NoopObserver).unwrap(), Some(1));
        assert_eq!(sim.now(), Tick(1));
        assert_eq!(sim.step(&mut NoopObserver).unwrap(), Some(1));
        assert_eq!(sim.now(), Tick(2));
        assert_eq!(sim.state(), SimState::Running);
    }

    #[test]
    fn step_after_exhaustion_finishes_without_advancing() {
        let mut sim = SimBuilder::new(1, vec![plan(0, &[1])]).build().unwrap();
        sim.step(&mut NoopObserver).unwrap();
        assert_eq!(sim.step(&mut NoopObserver).unwrap(), None);
        assert_eq!(sim.state(), SimState::Finished);
        assert_eq!(sim.now(), Tick(1));
    }

    #[test]
    fn idle_ticks_before_first_arrival_count() {
        let mut sim = SimBuilder::new(1, vec![plan(2, &[1])]).build().unwrap();
        assert_eq!(sim.step(&mut NoopObserver).unwrap(), Some(0));
        assert_eq!(sim.step(&mut NoopObserver).unwrap(), Some(0));
        assert_eq!(sim.step(&mut NoopObserver).unwrap(), Some(1));
        assert_eq!(sim.step(&mut NoopObserver).unwrap(), None);
    }

    #[test]
    fn one_event_per_doctor_per_tick() {
        let (end, rec) = run(3, vec![plan(0, &[1, 3]), plan(0, &[1, 2]), plan(1, &[3])]);
        assert_eq!(rec.events.len() as u64, end.0 * 3);
        for (i, chunk) in rec.events.chunks(3).enumerate() {
            let doctors: Vec<u32> = chunk.iter().map(|e| e.doctor.0).collect();
            assert_eq!(doctors, vec![1, 2, 3], "tick {i}");
            assert!(chunk.iter().all(|e| e.tick == Tick(i as u64)));
        }
    }

    #[test]
    fn failed_forward_halts_the_driver() {
        let mut sim = SimBuilder::new(2, vec![plan(0, &[1, 5]), plan(0, &[2, 1])]).build().unwrap();
        let err = sim.run(&mut NoopObserver).unwrap_err();
        assert!(err.is_invalid_doctor(), "{err}");
        assert_eq!(sim.state(), SimState::Failed);
        assert_eq!(sim.now(), Tick(0));

        let mut rec = Recorder::default();
        assert!(matches!(sim.run(&mut rec), Err(SimError::Halted { tick: Tick(0) })));
        assert!(matches!(sim.step(&mut rec), Err(SimError::Halted { .. })));
        assert!(rec.tick_starts.is_empty());
        assert!(rec.events.is_empty());
        assert_eq!(rec.end, None);
        assert_eq!(sim.admissions(), 0);
        assert_eq!(sim.state(), SimState::Failed);
    }

    #[test]
    fn tick_limit_aborts_unfinished_run() {
        let mut sim = SimBuilder::new(1, vec![plan(0, &[1]), plan(0, &[1])])
            .max_ticks(1)
            .build()
            .unwrap();
        match sim.run(&mut NoopObserver) {
            Err(SimError::TickLimitExceeded { limit, waiting }) => {
                assert_eq!(limit, 1);
                assert_eq!(waiting, 1);
            }
            other => panic!("expected TickLimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn tick_limit_equal_to_run_length_succeeds() {
        let mut sim = SimBuilder::new(1, vec![plan(0, &[1]), plan(0, &[1])])
            .max_ticks(2)
            .build()
            .unwrap();
        assert_eq!(sim.run(&mut NoopObserver).unwrap(), Tick(2));
        assert_eq!(sim.state(), SimState::Finished);
    }

    #[test]
    fn tuple_observer_drives_both() {
        let mut sim = SimBuilder::new(1, vec![plan(0, &[1])]).build().unwrap();
        let mut pair = (Recorder::default(), Recorder::default());
        sim.run(&mut pair).unwrap();
        assert_eq!(pair.0.events, pair.1.events);
        assert_eq!(pair.1.end, Some(Tick(1)));
    }

    #[test]
    fn log_observer_runs_without_logger() {
        let mut sim = SimBuilder::new(2, vec![plan(0, &[1, 2]), plan(1, &[2])]).build().unwrap();
        assert_eq!(sim.run(&mut crate::LogObserver).unwrap(), Tick(3));
    }
}

// ── Whole-run properties over synthetic rosters ───────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    fn roster(seed: u64) -> Roster {
        synthetic_roster(&SyntheticConfig {
            monk_count:   40,
            doctor_count: 5,
            max_stops:    6,
            max_arrival:  12,
            seed,
        })
        .unwrap()
    }

    fn run_roster(roster: &Roster, policy: AdmissionPolicy) -> (Tick, Recorder) {
        let mut sim = SimBuilder::from_roster(roster.clone()).admission(policy).build().unwrap();
        let mut rec = Recorder::default();
        let end = sim.run(&mut rec).unwrap();
        assert_eq!(sim.admissions() as usize, roster.total_visits());
        assert_eq!(sim.completed(), roster.monk_count());
        (end, rec)
    }

    const POLICIES: [AdmissionPolicy; 2] = [AdmissionPolicy::OnePerTick, AdmissionPolicy::DrainEligible];

    #[test]
    fn admissions_equal_total_stops() {
        for seed in 0..8 {
            let roster = roster(seed);
            for policy in POLICIES {
                let (_, rec) = run_roster(&roster, policy);
                assert_eq!(rec.admissions().len(), roster.total_visits(), "seed {seed} {policy:?}");
            }
        }
    }

    #[test]
    fn each_monk_visits_its_itinerary_in_order() {
        for seed in 0..8 {
            let roster = roster(seed);
            for policy in POLICIES {
                let (_, rec) = run_roster(&roster, policy);
                for (i, plan) in roster.plans.iter().enumerate() {
                    let visits = rec.visits_of(MonkId(i as u32 + 1));
                    let doctors: Vec<DoctorId> = visits.iter().map(|&(_, d)| d).collect();
                    assert_eq!(doctors, plan.stops, "seed {seed} monk {}", i + 1);
                    assert!(visits.windows(2).all(|w| w[0].0 < w[1].0));
                    if let Some(&(first, _)) = visits.first() {
                        assert!(first >= plan.arrival);
                    }
                }
            }
        }
    }

    #[test]
    fn at_most_one_admission_per_doctor_per_tick() {
        for seed in 0..8 {
            let (_, rec) = run_roster(&roster(seed), AdmissionPolicy::OnePerTick);
            let mut seen = BTreeMap::new();
            for (tick, doctor, monk) in rec.admissions() {
                assert!(seen.insert((tick, doctor), monk).is_none(), "seed {seed}: {doctor} twice at {tick}");
            }
        }
    }

    #[test]
    fn shared_slot_admits_lower_id_first() {
        for seed in 0..8 {
            for policy in POLICIES {
                let (_, rec) = run_roster(&roster(seed), policy);
                let mut by_slot: BTreeMap<(DoctorId, Tick), Vec<(Tick, MonkId)>> = BTreeMap::new();
                for e in &rec.events {
                    if let Some(a) = &e.admission {
                        by_slot.entry((e.doctor, a.slot)).or_default().push((e.tick, a.monk));
                    }
                }
                for admitted in by_slot.values() {
                    assert!(admitted.windows(2).all(|w| w[0].1 < w[1].1), "seed {seed}: {admitted:?}");
                    if policy == AdmissionPolicy::OnePerTick {
                        assert!(admitted.windows(2).all(|w| w[0].0 < w[1].0));
                    }
                }
            }
        }
    }

    #[test]
    fn terminates_within_bound() {
        for seed in 0..8 {
            let roster = roster(seed);
            let bound = (roster.monk_count() * roster.max_visits()) as u64 + roster.max_arrival().0;
            for policy in POLICIES {
                let (end, _) = run_roster(&roster, policy);
                assert!(end.0 <= bound, "seed {seed}: end {end} exceeds bound {bound}");
            }
        }
    }

    #[test]
    fn clock_increases_by_one_per_tick() {
        let (end, rec) = run_roster(&roster(3), AdmissionPolicy::OnePerTick);
        let expected: Vec<Tick> = (0..end.0).map(Tick).collect();
        assert_eq!(rec.tick_starts, expected);
        assert_eq!(rec.tick_ends.iter().map(|&(t, _)| t).collect::<Vec<_>>(), expected);
        assert_eq!(rec.end, Some(end));
    }

    #[test]
    fn final_tick_is_one_past_last_admission() {
        for seed in 0..8 {
            let (end, rec) = run_roster(&roster(seed), AdmissionPolicy::OnePerTick);
            let last = rec.admissions().iter().map(|&(t, _, _)| t).max().unwrap();
            assert_eq!(end, last.next());
        }
    }
}
