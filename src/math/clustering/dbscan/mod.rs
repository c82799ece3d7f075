pub mod algorithm;
mod label;
