//! Polarization demodulation module

pub mod demodulator;
pub mod types;

pub use demodulator::demodulate;
pub use types::DemodulationMatrix;
