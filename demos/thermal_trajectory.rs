//! Plays the desert-day scenario at minimum and maximum evaporation and prints
//! how the body temperature evolves.
//!
//! Run with `cargo run --example thermal_trajectory`. Set `RUST_LOG=debug` to
//! see the model's own logging.

use rand::{Rng, SeedableRng, rngs::StdRng};
use thermoreg_models::{
    models::thermal::body::{
        Conditions, ThermalModel,
        equilibrium::{self, EquilibriumConfig},
        trajectory::{Scenario, Trajectory},
    },
    support::units::CelsiusEquivalent,
};
use tracing_subscriber::EnvFilter;
use uom::si::{f64::Time, time::second};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let minimum = play(-1.0);
    let maximum = play(1.0);

    println!("{:>8}  {:>12}  {:>12}", "time [s]", "min evap", "max evap");
    for t in (0..=1800).step_by(100) {
        let time = Time::new::<second>(f64::from(t));
        println!(
            "{t:>8}  {:>12.4}  {:>12.4}",
            minimum.temperature_at(time).unwrap_or(f64::NAN),
            maximum.temperature_at(time).unwrap_or(f64::NAN),
        );
    }

    for (label, evaporative_action) in [("minimum", -1.0), ("maximum", 1.0)] {
        let scenario = Scenario::desert_day(evaporative_action);
        let idle = vec![0.0; scenario.action_dim];
        for is_shade in [false, true] {
            let conditions = Conditions {
                action: &idle,
                evaporative_action,
                temp_air: scenario.temp_air,
                temp_earth: scenario.temp_earth,
                is_shade,
            };
            let model = ThermalModel::default();
            match equilibrium::solve(
                model.parameters(),
                &conditions,
                EquilibriumConfig::default(),
            ) {
                Ok(balance) => println!(
                    "equilibrium at {label} evaporation, shade={is_shade}: {:.3}",
                    balance.body_temperature.celsius_equivalent()
                ),
                Err(err) => eprintln!("equilibrium at {label} evaporation failed: {err}"),
            }
        }
    }
}

fn play(evaporative_action: f64) -> Trajectory {
    let mut rng = StdRng::seed_from_u64(0);
    let mut model = ThermalModel::default();
    model.reset(None);

    Scenario::desert_day(evaporative_action).run(&mut model, |action| {
        for component in action.iter_mut() {
            *component = rng.gen_range(-1.0..1.0);
        }
    })
}
