#![cfg(test)]

// Cross-module scenarios; unit tests live next to the code they cover.
pub mod common;
mod preferences;
mod scroll;
