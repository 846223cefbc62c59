//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the driver against mock
//! host adapters.  All tests run on the host (x86_64) with no real PMIC
//! required.

mod bootstrap_tests;
mod controller_tests;
