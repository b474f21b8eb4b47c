#![no_main]
use harness::{test_one_input, BinaryPlist};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    test_one_input(&BinaryPlist, data);
});
