//! Ports layer - interfaces between the application and the outside world.

pub mod outbound;
