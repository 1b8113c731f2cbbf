use listcomb::Zipped;

#[derive(Zipped)]
struct Marker;

fn main() {}
