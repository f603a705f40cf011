fn main() {
    #[cfg(feature = "cli")]
    fosdelta::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("fosdelta: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
