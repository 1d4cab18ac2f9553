use std::io;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    pokerbots_cli::logging::init_logging(pokerbots_cli::wants_verbose(&args));
    let code = pokerbots_cli::run(args, &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
