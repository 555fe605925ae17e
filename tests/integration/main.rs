//! Integration tests for finch-demo

mod cli_test;
mod copy_test;
mod helpers;
mod playback_test;
