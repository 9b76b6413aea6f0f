use std::io;

fn main() {
    twentyone_cli::logging::init_logging();
    let code = twentyone_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
