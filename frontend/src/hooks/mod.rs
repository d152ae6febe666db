pub mod use_packages;

pub use use_packages::{use_packages, FetchState, UsePackagesResult};
