pub mod main;
pub mod system;
pub mod translator;
pub mod asr;
pub mod utils;

pub use main::Config;
