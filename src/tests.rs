use crate::{Error, ErrorKind, Value};


fn parse(input: &str) -> Result<Value, Error> {
    crate::parse_str(input)
}

fn parse_err(input: &str) -> ErrorKind {
    match parse(input) {
        Ok(value) => panic!("parsing `{}` succeeded with {:?}", input, value),
        Err(e) => e.into_kind(),
    }
}
