#![no_main]

use libfuzzer_sys::fuzz_target;

use rootcalc_core::parse_integer;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for radix in [2, 10, 16, 36] {
        // Anything that parses must print back to the same value
        if let Ok(n) = parse_integer(text, radix) {
            let printed = n.to_str_radix(radix);
            assert_eq!(parse_integer(&printed, radix).unwrap(), n);
        }
    }
});
