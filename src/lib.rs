//! Genetic-algorithm engine for the Euclidean Traveling Salesman Problem.
//!
//! The engine keeps a population of candidate tours, ranks them by closed
//! tour length, carries the best forward unchanged, and breeds the rest by
//! order-preserving segment crossover and per-position swap mutation.
//!
//! - **Geometry** ([`geometry`]): [`City`] and Euclidean [`distance`]
//! - **Tours** ([`tour`]): permutations of city indices, [`tour_length`],
//!   [`fitness`]
//! - **Population** ([`population`]): random initialization, ranking, best
//! - **Operators**: [`selection`], [`crossover`], [`mutation`]
//! - **Engine** ([`engine`]): one generation per [`Engine::step`] call
//!
//! # Driving the engine
//!
//! The engine has no timer of its own. Rendering or animation code calls
//! [`Engine::step`] at whatever cadence it likes and draws
//! [`Snapshot::best_tour`]; [`Engine::current_best`] inspects without
//! advancing.
//!
//! ```
//! use u_tsp::{City, Engine, EngineConfig};
//!
//! let cities: Vec<City> = [(100.0, 100.0), (200.0, 200.0), (300.0, 100.0), (150.0, 300.0)]
//!     .into_iter()
//!     .map(City::from)
//!     .collect();
//! let mut engine = Engine::new(EngineConfig::new(cities).with_max_generations(20)).unwrap();
//! for _ in 0..20 {
//!     let snapshot = engine.step();
//!     // draw snapshot.best_tour ...
//! #   assert_eq!(snapshot.best_tour.len(), 4);
//! }
//! assert!(engine.step().finished);
//! ```
//!
//! # Logging
//!
//! Construction and every generation emit `tracing` events. The crate never
//! installs a subscriber.

pub mod config;
pub mod crossover;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod mutation;
pub mod population;
pub mod random;
pub mod selection;
pub mod tour;

pub use config::EngineConfig;
pub use engine::{Engine, RunResult, Snapshot};
pub use error::{EngineError, TspResult};
pub use geometry::{distance, City};
pub use population::Population;
pub use selection::Selection;
pub use tour::{fitness, route_length, tour_length, Tour};
