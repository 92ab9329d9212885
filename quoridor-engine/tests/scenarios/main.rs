mod common;

mod bots;
mod fences;
mod moves;
mod terminal;
