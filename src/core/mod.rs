pub mod alerts;
pub mod api;
pub mod bundler;
pub mod config;
pub mod i18n;

#[cfg(test)]
mod flow_test;
