use textcompare::Strategy;

fn main() {
    let old = "the quick fox";
    let new = "the slow fox";

    for strategy in Strategy::all() {
        println!("{}: {}", strategy.name(), strategy.description());
        let result = strategy.compare(old, new);
        println!("{}", result.unified);
        println!(
            "({} additions, {} deletions, {} changes)\n",
            result.additions, result.deletions, result.changes
        );
    }
}
