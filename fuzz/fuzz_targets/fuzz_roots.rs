#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, Sign};
use num_traits::Signed;

use rootcalc_core::verify;
use rootcalc_core::{icbrt, ilog2, isqrt};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the sign, the rest is the magnitude (capped for speed)
    let sign = if data[0] & 1 == 1 { Sign::Minus } else { Sign::Plus };
    let bytes = &data[1..data.len().min(1025)];
    let n = BigInt::from_bytes_le(sign, bytes);

    match isqrt(&n) {
        Ok(r) => verify::check_sqrt(&n, &r).unwrap(),
        Err(_) => assert!(n.is_negative(), "isqrt rejected {n}"),
    }

    let c = icbrt(&n);
    verify::check_cbrt(&n, &c).unwrap();
    assert_eq!(icbrt(&-&n), -c, "icbrt is not odd at {n}");

    match ilog2(&n) {
        Ok(k) => verify::check_log2(&n, k).unwrap(),
        Err(_) => assert!(!n.is_positive(), "ilog2 rejected {n}"),
    }
});
