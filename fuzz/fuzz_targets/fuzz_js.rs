#![no_main]
use jspath::{ParseError, Path};
use libfuzzer_sys::fuzz_target;

// Arbitrary text never panics the parser, and whatever prefix the partial
// parser accepts parses strictly to the same path.
fuzz_target!(|input: &str| {
    match Path::from_js_partial(input) {
        Ok((path, consumed)) => {
            let prefix = input
                .get(..consumed)
                .expect("consumed offset is a char boundary");
            assert_eq!(Path::from_js(prefix).as_ref(), Ok(&path));
            assert_eq!(Path::from_js(&path.to_js()).as_ref(), Ok(&path));

            let strict = Path::from_js(input);
            if consumed == input.len() {
                assert_eq!(strict, Ok(path));
            } else {
                assert_eq!(strict, Err(ParseError::Incomplete { offset: consumed }));
            }
        }
        Err(err) => {
            assert!(matches!(err, ParseError::Bracket { .. }));
            assert_eq!(Path::from_js(input), Err(err));
        }
    }
});
