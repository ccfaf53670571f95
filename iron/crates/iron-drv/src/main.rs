fn main() {
    if iron_drv::run().is_err() {
        std::process::exit(1);
    }
}
