use listcomb::{Sequence, Zipped};

#[derive(Zipped)]
struct Pair(Sequence<i32>, Sequence<i32>);

fn main() {}
