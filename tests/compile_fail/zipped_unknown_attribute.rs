use listcomb::{Sequence, Zipped};

#[derive(Zipped)]
#[zipped(rows = "Row")]
struct Columns {
    xs: Sequence<i32>,
}

fn main() {}
