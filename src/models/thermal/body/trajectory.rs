//! Scenario playback.
//!
//! A [`Scenario`] drives a [`ThermalModel`] through a fixed horizon under
//! constant air and ground temperatures, switching shade and activity level
//! at scheduled times. It is the harness used to eyeball how the body
//! responds to sun, shade and exertion.

use uom::{
    ConstZero,
    si::{f64::Time, time::second},
};

use super::{Conditions, ThermalModel};

/// One segment of a scenario schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    /// The phase applies once elapsed time is strictly past `start`.
    /// A phase starting at zero also covers the first step.
    pub start: Time,

    /// Whether the body is shaded during this phase.
    pub is_shade: bool,

    /// Scale applied to every sampled action component.
    pub activity: f64,
}

/// A fixed-horizon run under constant surroundings.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Air temperature, Celsius-equivalent.
    pub temp_air: f64,

    /// Ground temperature, Celsius-equivalent.
    pub temp_earth: f64,

    /// Evaporative action held for the whole run.
    pub evaporative_action: f64,

    /// Time step passed to every [`ThermalModel::step`].
    pub dt: Time,

    /// Length of the run. A trailing partial step is dropped.
    pub duration: Time,

    /// Number of action components sampled each step.
    pub action_dim: usize,

    /// Schedule, ordered by start time.
    pub phases: Vec<Phase>,
}

/// A body temperature recorded after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Elapsed time at the start of the step.
    pub time: Time,

    /// Body temperature after the step, Celsius-equivalent.
    pub temperature: f64,
}

/// Recorded output of [`Scenario::run`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    /// One sample per step, in step order.
    pub samples: Vec<Sample>,
}

impl Trajectory {
    /// Final body temperature, if any step was taken.
    #[must_use]
    pub fn last_temperature(&self) -> Option<f64> {
        self.samples.last().map(|sample| sample.temperature)
    }

    /// Peak body temperature over the run.
    #[must_use]
    pub fn max_temperature(&self) -> Option<f64> {
        self.samples
            .iter()
            .map(|sample| sample.temperature)
            .reduce(f64::max)
    }

    /// Body temperature at the last sample taken at or before `time`.
    #[must_use]
    pub fn temperature_at(&self, time: Time) -> Option<f64> {
        self.samples
            .iter()
            .take_while(|sample| sample.time <= time)
            .last()
            .map(|sample| sample.temperature)
    }
}

impl Scenario {
    /// Thirty minutes on hot ground with an eight-component action vector.
    ///
    /// Sun with light activity, then shade with full activity from 500 s,
    /// shade with light activity from 1000 s, and sun with moderate activity
    /// from 1500 s.
    #[must_use]
    pub fn desert_day(evaporative_action: f64) -> Self {
        let phase = |start: f64, is_shade: bool, activity: f64| Phase {
            start: Time::new::<second>(start),
            is_shade,
            activity,
        };

        Self {
            temp_air: 35.0,
            temp_earth: 40.0,
            evaporative_action,
            dt: Time::new::<second>(0.05),
            duration: Time::new::<second>(60.0 * 30.0),
            action_dim: 8,
            phases: vec![
                phase(0.0, false, 0.1),
                phase(500.0, true, 1.0),
                phase(1000.0, true, 0.1),
                phase(1500.0, false, 0.5),
            ],
        }
    }

    /// Number of steps in the horizon, rounded down.
    #[must_use]
    pub fn step_count(&self) -> usize {
        let steps = self.duration.get::<second>() / self.dt.get::<second>();
        if steps.is_finite() && steps > 0.0 {
            steps.floor() as usize
        } else {
            0
        }
    }

    /// Phase in effect at `elapsed`.
    ///
    /// Returns `None` before the first phase starts or if the schedule is
    /// empty.
    #[must_use]
    pub fn phase_at(&self, elapsed: Time) -> Option<&Phase> {
        self.phases
            .iter()
            .rev()
            .find(|phase| elapsed > phase.start || phase.start == Time::ZERO)
    }

    /// Runs the scenario from the model's current state.
    ///
    /// `sample` fills the action buffer with raw components (nominally in
    /// `[-1, 1]`), which are then scaled by the active phase's activity.
    /// Before the first phase starts, or without phases, the body stays in
    /// the sun with unscaled actions.
    pub fn run<F>(&self, model: &mut ThermalModel, mut sample: F) -> Trajectory
    where
        F: FnMut(&mut [f64]),
    {
        let steps = self.step_count();
        let mut action = vec![0.0; self.action_dim];
        let mut samples = Vec::with_capacity(steps);

        for i in 0..steps {
            let time = self.dt * i as f64;
            let (is_shade, activity) = self
                .phase_at(time)
                .map_or((false, 1.0), |phase| (phase.is_shade, phase.activity));

            sample(&mut action);
            for component in &mut action {
                *component *= activity;
            }

            let conditions = Conditions {
                action: &action,
                evaporative_action: self.evaporative_action,
                temp_air: self.temp_air,
                temp_earth: self.temp_earth,
                is_shade,
            };
            let temperature = model.step(&conditions, self.dt);
            samples.push(Sample { time, temperature });
        }

        tracing::debug!(
            steps,
            final_temp = samples.last().map(|s: &Sample| s.temperature),
            "finished scenario"
        );

        Trajectory { samples }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn seconds(value: f64) -> Time {
        Time::new::<second>(value)
    }

    #[test]
    fn desert_day_horizon() {
        let scenario = Scenario::desert_day(-1.0);
        assert_eq!(scenario.step_count(), 36_000);
    }

    #[test]
    fn phase_boundaries_are_exclusive() {
        let scenario = Scenario::desert_day(-1.0);

        let at = |t: f64| scenario.phase_at(seconds(t)).copied().unwrap();

        assert!(!at(0.0).is_shade);
        assert!(!at(500.0).is_shade);
        assert!(at(500.05).is_shade);
        assert_relative_eq!(at(500.05).activity, 1.0);
        assert_relative_eq!(at(1000.05).activity, 0.1);
        assert!(at(1000.05).is_shade);
        assert!(!at(1799.0).is_shade);
        assert_relative_eq!(at(1799.0).activity, 0.5);
    }

    #[test]
    fn records_one_sample_per_step() {
        let scenario = Scenario {
            duration: seconds(10.0),
            ..Scenario::desert_day(0.0)
        };
        let mut model = ThermalModel::default();

        let trajectory = scenario.run(&mut model, |action| action.fill(0.0));

        assert_eq!(trajectory.samples.len(), 200);
        assert_eq!(trajectory.samples[0].time, Time::ZERO);
        assert_eq!(trajectory.last_temperature(), Some(model.temperature()));
    }

    #[test]
    fn activity_scales_actions() {
        let scenario = Scenario {
            duration: seconds(1.0),
            phases: vec![Phase {
                start: Time::ZERO,
                is_shade: true,
                activity: 0.0,
            }],
            ..Scenario::desert_day(-1.0)
        };

        let mut idle = ThermalModel::default();
        let idle_run = scenario.run(&mut idle, |action| action.fill(0.0));

        let mut flailing = ThermalModel::default();
        let flailing_run = scenario.run(&mut flailing, |action| action.fill(1.0));

        assert_eq!(idle_run, flailing_run);
    }

    #[test]
    fn maximum_evaporation_runs_cooler() {
        let run = |evaporative_action: f64| {
            let mut rng = StdRng::seed_from_u64(3);
            let mut model = ThermalModel::default();
            Scenario::desert_day(evaporative_action).run(&mut model, |action| {
                for component in action.iter_mut() {
                    *component = rng.gen_range(-1.0..1.0);
                }
            })
        };

        let dry = run(-1.0);
        let wet = run(1.0);

        assert_eq!(dry.samples.len(), wet.samples.len());
        assert!(wet.last_temperature().unwrap() < dry.last_temperature().unwrap());
        assert!(wet.max_temperature().unwrap() < dry.max_temperature().unwrap());
        assert!(dry.temperature_at(seconds(500.0)).unwrap() > 38.0);
    }

    #[test]
    fn late_first_phase_waits_for_its_start() {
        let scenario = Scenario {
            duration: seconds(1.0),
            phases: vec![Phase {
                start: seconds(500.0),
                is_shade: true,
                activity: 0.0,
            }],
            ..Scenario::desert_day(-1.0)
        };

        assert!(scenario.phase_at(Time::ZERO).is_none());
        assert!(scenario.phase_at(seconds(500.0)).is_none());
        assert!(scenario.phase_at(seconds(500.05)).unwrap().is_shade);

        // The whole run ends before 500 s, so it matches an unscheduled run
        // in the sun with unscaled actions.
        let unscheduled = Scenario {
            phases: Vec::new(),
            ..scenario.clone()
        };
        let mut model = ThermalModel::default();
        let late = scenario.run(&mut model, |action| action.fill(0.5));
        let mut model = ThermalModel::default();
        let plain = unscheduled.run(&mut model, |action| action.fill(0.5));
        assert_eq!(late, plain);
        assert!(late.last_temperature().unwrap() > 38.0);
    }

    #[test]
    fn empty_schedule_stays_in_the_sun() {
        let scenario = Scenario {
            duration: seconds(1.0),
            phases: Vec::new(),
            ..Scenario::desert_day(-1.0)
        };
        assert!(scenario.phase_at(Time::ZERO).is_none());

        let mut model = ThermalModel::default();
        let trajectory = scenario.run(&mut model, |action| action.fill(0.0));
        assert!(trajectory.last_temperature().unwrap() > 38.0);
    }
}
