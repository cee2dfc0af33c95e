pub mod states;
pub mod params;
pub mod pointer;
pub mod forces;
pub mod collision;
pub mod integrator;
pub mod engine;
pub mod render;
pub mod diagnostics;
pub mod scenario;
