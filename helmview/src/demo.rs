//! Demo mode CST simulation.
//!
//! Stands in for the CST simulation when running without Zenoh: tracks the
//! commanded speed, burns fuel accordingly and now and then orders a speed
//! change of its own so the inbound path can be seen working.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use helmview_common::{CstValue, catalog};

/// Fuel load at start of the demo, in kg.
const INITIAL_FUEL_KG: f64 = 450_000.0;

/// Hotel load burned regardless of speed, kg per tick.
const BASE_BURN_KG: f64 = 0.8;

/// Propulsion burn coefficient (cubic in speed), kg per tick per knot^3.
const PROPULSION_BURN_KG: f64 = 0.0015;

/// Ticks between chances of a CST-ordered speed change.
const ORDER_INTERVAL: u64 = 45;

/// Chance that CST orders a change at each interval.
const ORDER_PROBABILITY: f64 = 0.2;

/// Demo simulation state.
pub struct DemoSimulator {
    rng: SmallRng,
    tick: u64,
    desired_speed: f32,
    fuel_load: f64,
}

impl DemoSimulator {
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }

    /// Deterministic simulator for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            rng,
            tick: 0,
            desired_speed: 0.0,
            fuel_load: INITIAL_FUEL_KG,
        }
    }

    /// Commanded speed as last written by the dashboard or CST.
    pub fn desired_speed(&self) -> f32 {
        self.desired_speed
    }

    pub fn fuel_load(&self) -> f64 {
        self.fuel_load
    }

    /// Accept a desiredSpeed write from the dashboard.
    pub fn set_desired_speed(&mut self, speed: f32) {
        tracing::debug!(speed, "Demo CST received desiredSpeed");
        self.desired_speed = speed;
    }

    /// Handle an operation call.
    ///
    /// `SetCondition1` brings the ship to Ahead Full.
    pub fn call_operation(&mut self, name: &str) -> Vec<CstValue> {
        match name {
            "SetCondition1" => {
                self.desired_speed = 25.0;
                vec![CstValue::DesiredSpeed(self.desired_speed)]
            }
            other => {
                tracing::warn!(operation = other, "Demo CST has no such operation");
                Vec::new()
            }
        }
    }

    /// Advance one second of simulation.
    pub fn tick(&mut self) -> Vec<CstValue> {
        self.tick += 1;
        let mut values = Vec::with_capacity(2);

        if self.tick % ORDER_INTERVAL == 0 && self.rng.random_bool(ORDER_PROBABILITY) {
            let detents = catalog();
            let ordered = detents[self.rng.random_range(0..detents.len())].target_speed;
            if ordered != self.desired_speed {
                tracing::info!(speed = ordered, "Demo CST ordering new speed");
                self.desired_speed = ordered;
                values.push(CstValue::DesiredSpeed(ordered));
            }
        }

        let speed = f64::from(self.desired_speed);
        let burn = (BASE_BURN_KG + PROPULSION_BURN_KG * speed.powi(3))
            * self.rng.random_range(0.98..1.02);
        self.fuel_load = (self.fuel_load - burn).max(0.0);

        values.push(CstValue::TotalFuelLoad(Some(
            (self.fuel_load * 10.0).round() / 10.0,
        )));
        values
    }
}

impl Default for DemoSimulator {
    fn default() -> Self {
        Self::new()
    }
}
