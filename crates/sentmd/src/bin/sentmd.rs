fn main() {
    if let Err(err) = sentmd::run() {
        eprintln!("{}", sentmd::format_error(&err));
        std::process::exit(1);
    }
}
