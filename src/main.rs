fn main() {
    env_logger::init();

    match maze::solver() {
        Ok(_) => {}
        Err(e) => eprintln!("{}", e),
    }
}
