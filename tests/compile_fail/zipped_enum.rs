use listcomb::{Sequence, Zipped};

#[derive(Zipped)]
enum Columns {
    Left { xs: Sequence<i32> },
    Right { ys: Sequence<i32> },
}

fn main() {}
