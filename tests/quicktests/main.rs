#[macro_use(quickcheck)]
extern crate quickcheck_macros;

#[path = "../../src/test/quick.rs"]
mod quick;

mod tree;

use quick::Op;
