use listcomb::{Sequence, Zipped};

#[derive(Zipped)]
struct Columns {
    xs: Sequence<i32>,
    total: usize,
}

fn main() {}
