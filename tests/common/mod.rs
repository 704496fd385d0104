#![allow(dead_code)]

pub use byexample_test_utils::{init_tracing, with_timeout};

use byexample::fs::mock::MockFileSystem;

/// The "values" example from the site, trimmed down.
pub const VALUES_RB: &str = "\
# Ruby has various value types including strings,
# integers, floats, booleans, etc.

# Strings, which can be added together with `+`.
puts \"ruby\" << \"-lang\" + \".org\"

# Booleans, with boolean operators as you'd expect.
puts true && false
";

pub fn values_fs() -> MockFileSystem {
    let fs = MockFileSystem::new();
    fs.add_file("examples/values/values.rb", VALUES_RB);
    fs
}
