use afl::fuzz;
use gs1_case_code::{compute_check_digit, compute_master_case_code, Gs1Checksum, Validator};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    let i = input.iter().position(|b| *b == b',')?;
    Some((&input[0..i], &input[i + 1..]))
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for byte in rand_seed.iter().take(8) {
        rng_seed <<= 8;
        rng_seed += *byte as u64;
    }

    run_fuzz(input_str, StdRng::seed_from_u64(rng_seed));
    Some(())
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
    }

    let check_digit = compute_check_digit(input);
    let case_code = compute_master_case_code(input);
    // both functions accept and reject exactly the same inputs
    assert_eq!(check_digit.is_ok(), case_code.is_ok());

    let (Ok(check_digit), Ok(case_code)) = (check_digit, case_code) else {
        return;
    };
    assert!(check_digit.is_ascii_digit());
    assert_eq!(case_code.len(), input.len() + 3);
    assert_eq!(compute_check_digit(input), Ok(check_digit));

    let full_code = format!("{}{}", input, check_digit);
    assert!(Gs1Checksum.is_valid_match(&full_code));
    assert!(Gs1Checksum.is_valid_match(&case_code));

    // A single substituted digit must always be detected.
    let mut corrupted = full_code.into_bytes();
    let index = rng.gen_range(0..corrupted.len());
    let replacement = b'0' + (corrupted[index] - b'0' + rng.gen_range(1..10)) % 10;
    corrupted[index] = replacement;
    if let Ok(corrupted) = String::from_utf8(corrupted) {
        #[cfg(feature = "manual_test")]
        {
            println!("Corrupted: {:?}", corrupted);
        }
        assert!(!Gs1Checksum.is_valid_match(&corrupted));
    }
}
