// Walkthrough of the singly-linked list operations.
//
// Run with: cargo run --bin list_demo

use linked_list_fundamentals::{AllocationError, List};

fn main() -> Result<(), AllocationError> {
    let mut list = List::new();

    for i in 0..10 {
        list.append(i)?;
    }
    // 0 1 2 3 4 5 6 7 8 9
    list.print();

    list.prepend(9000)?;
    // 9000 0 1 2 3 4 5 6 7 8 9
    list.print();

    // The three pops return 9000, 0 and 1.
    for _ in 0..3 {
        list.pop_front_or_zero();
    }
    // 2 3 4 5 6 7 8 9
    list.print();

    Ok(())
}
