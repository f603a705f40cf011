#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the decoder with arbitrary bytes.
    // It must never panic or read out of bounds — only return errors.
    let _ = fosdelta::apply(&[], data, true);
    let _ = fosdelta::output_size(data);

    // Also fuzz with a non-empty source.
    if data.len() >= 2 {
        let split = data.len() / 2;
        let (source, delta) = data.split_at(split);
        let _ = fosdelta::apply(source, delta, true);
        let _ = fosdelta::apply(source, delta, false);
    }
});
