//! Fixture tests for the JSX transpiler.
//!
//! Each `tests/<mode>.<case>.jsx` file is compiled through the CLI wrapper
//! in the given mode and compared against `tests/<mode>.<case>.js`, or
//! expected to fail with the message in `tests/<mode>.<case>.err`. The
//! test functions are generated by the build script.


include!(concat!(env!("OUT_DIR"), "/tests.rs"));
