// File-copy exercise: copies infa.txt to copyinfa.txt, shifting every
// byte down by 32 so lowercase text comes out uppercase.
//
// Run with: cargo run --bin shift_copy_demo

use std::path::Path;
use std::process;

use linked_list_fundamentals::shift_copy::{shift_copy, DEFAULT_INPUT, DEFAULT_OUTPUT};

fn main() {
    let input = Path::new(DEFAULT_INPUT);
    let output = Path::new(DEFAULT_OUTPUT);

    if let Err(err) = shift_copy(input, output) {
        println!("{}", err);
        process::exit(1);
    }

    println!("Success");
}
