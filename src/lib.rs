pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod filter;
pub mod output;
pub mod pages;
pub mod render;
pub mod review;
pub mod state;
pub mod storage;
pub mod weather;

#[cfg(test)]
mod tests;
