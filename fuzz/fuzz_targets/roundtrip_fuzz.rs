#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into a (source, target) pair and require an exact
    // verified roundtrip through create/apply.
    let split = data.len() / 2;
    let (source, target) = data.split_at(split);

    let delta = fosdelta::create(source, target);
    assert_eq!(fosdelta::output_size(&delta).unwrap(), target.len());
    let restored = fosdelta::apply(source, &delta, true).unwrap();
    assert_eq!(restored, target);
});
