//! Fuzz target for `sentmd.toml` parsing.
//!
//! Tests `TomlConfig::parse()` with arbitrary input for panics and hangs, and
//! checks that anything that parses survives a serialize/parse round trip.

#![no_main]
use libfuzzer_sys::fuzz_target;
use sentmd_settings::TomlConfig;

const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = TomlConfig::parse(s) else {
        return;
    };
    if let Ok(rendered) = toml::to_string(&config) {
        let again = TomlConfig::parse(&rendered).expect("rendered config must parse");
        assert_eq!(again, config);
    }
});
