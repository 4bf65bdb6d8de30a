fn main() {
    if let Err(err) = careway_lib::run() {
        eprintln!("careway: {err:#}");
        std::process::exit(1);
    }
}
