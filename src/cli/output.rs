use colored::Colorize;

pub fn print_info(message: &str) {
    println!("{}", message);
}

pub fn print_success(message: &str) {
    println!("{} {}", "[ok]".green().bold(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "[!]".yellow().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[x]".red().bold(), message);
}

pub fn print_section(title: &str) {
    println!("{}", title.bold().underline());
}
