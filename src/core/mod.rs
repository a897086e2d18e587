pub mod observer;
pub mod params;
pub mod report;
pub mod workflow;
