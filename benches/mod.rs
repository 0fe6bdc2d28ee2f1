#![cfg(unstable)]
#![feature(test)]
extern crate test;

use acorn_json::{Lexer, ReadSource, SliceSource, Token};

use std::str;

macro_rules! cases {
    ($($case:ident => $path:literal,)*) => {
        $(
            mod $case {
                use super::*;

                const INPUT: &[u8] = include_bytes!($path);

                #[bench]
                fn tokens(b: &mut test::Bencher) {
                    b.bytes = INPUT.len() as u64;
                    b.iter(|| {
                        let mut lexer = Lexer::new(SliceSource::new(INPUT));

                        loop {
                            let token = lexer.next_token().unwrap();
                            if token == Token::EOF {
                                break;
                            }

                            test::black_box(token);
                        }
                    })
                }

                #[bench]
                fn value(b: &mut test::Bencher) {
                    b.bytes = INPUT.len() as u64;
                    b.iter(|| acorn_json::parse_slice(INPUT).unwrap())
                }

                #[bench]
                fn value_reader(b: &mut test::Bencher) {
                    b.bytes = INPUT.len() as u64;
                    b.iter(|| acorn_json::parse(ReadSource::new(INPUT)).unwrap())
                }

                #[bench]
                fn value_serde_json(b: &mut test::Bencher) {
                    b.bytes = INPUT.len() as u64;
                    b.iter(|| {
                        let v: serde_json::Value = serde_json::from_slice(INPUT).unwrap();
                        v
                    })
                }

                #[bench]
                fn value_json(b: &mut test::Bencher) {
                    b.bytes = INPUT.len() as u64;
                    b.iter(|| {
                        let v: json::JsonValue = json::parse(str::from_utf8(INPUT).unwrap()).unwrap();
                        v
                    })
                }

                #[bench]
                fn value_simd_json(b: &mut test::Bencher) {
                    b.bytes = INPUT.len() as u64;
                    b.iter(|| {
                        let mut input = INPUT.to_vec();
                        let v = simd_json::to_borrowed_value(&mut input).unwrap();
                        test::black_box(v);
                    })
                }
            }
        )*
    };
}

cases! {
    event_10kb_stacktrace => "../cases/10kb_event_stacktrace.json",
    event_small => "../cases/event_small.json",
    numbers => "../cases/numbers.json",
}
