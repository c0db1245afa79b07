//! Movement domain: system modules for player input.

pub(crate) mod input;

pub(crate) use input::{read_input, request_exit};
