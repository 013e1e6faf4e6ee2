mod common;

mod metrics;
mod revenue;
