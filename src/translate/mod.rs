pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{DownloadConditions, TranslatorInterface};
pub use factory::TranslatorFactory;
