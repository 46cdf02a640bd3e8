pub mod api;
pub mod controller;
pub mod drive;
pub mod strategy;
pub mod system;

#[cfg(test)]
pub(crate) mod testing;
