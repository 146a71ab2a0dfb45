//! Test support.


pub(crate) use server::{CannedResponse, TestServer};
