#[macro_use]
extern crate approx;

mod degenerate;
mod end_to_end;
mod precise_retention;
mod random_sampling;
