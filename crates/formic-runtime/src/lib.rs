//! # Formic Runtime
//!
//! Colony state and the registry that drives it.
//!
//! A [`colony::Colony`] owns its rooms, its insects, and a food stock that
//! feeds the queen. Every tick the queen eats; when the stock runs out she
//! dies and the colony collapses for good. The [`registry::Registry`] owns
//! every colony of a simulation, hands out ids in creation order, and
//! advances time for all colonies together, one round at a time.

pub mod colony;
pub mod colony_builder;
pub mod registry;
pub mod prelude;
