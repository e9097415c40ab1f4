fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "# Hello\n## World\nMy name is **Egor**, I'm a *student*.\n\nI like:\n- programming (any kinds)\n- problem solving (usually programming or math or life)\n- and self-development".to_string()
    };

    println!("{}", mdhtml::convert_document(&md));
}
