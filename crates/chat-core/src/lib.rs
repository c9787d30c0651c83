pub mod event_bus;
pub mod lifecycle;
pub mod markdown;
pub mod ports;
pub mod transcript;

#[cfg(test)]
mod tests;
