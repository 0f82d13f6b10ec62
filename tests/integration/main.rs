//! Integration tests: the full application service against mock hardware.

mod control_loop_tests;
mod mock_hw;
mod service_tests;
