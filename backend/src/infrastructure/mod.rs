pub mod logging;
pub mod wiring;
