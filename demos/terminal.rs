use console::Style;
use textcompare::{compare, Strategy};

fn main() {
    let old = "the lazy dog\nsleeps in the sun\nall afternoon\nand into the evening";
    let new = "the lazy dog\nsleeps in the shade\nall afternoon";

    let result = compare(Strategy::Line, old, new);
    for row in result.unified.split('\n') {
        let style = match row.chars().next() {
            Some('-') => Style::new().red(),
            Some('+') => Style::new().green(),
            _ => Style::new().dim(),
        };
        println!("{}", style.apply_to(row));
    }
    println!(
        "\n{} additions, {} deletions, {} changes",
        result.additions, result.deletions, result.changes
    );
}
