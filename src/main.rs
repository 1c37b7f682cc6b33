use colored::Colorize;
use router_addr::cli;
use router_addr::config::Config;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env();
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!("logging disabled, {}: {e}", config.log_config);
    }
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match cli::run(&args, &config) {
        Ok(output) => println!("{}", output.green()),
        Err(e) => {
            log::error!("ERR {e}");
            eprintln!("{}", e.to_string().red());
            std::process::exit(1);
        }
    }
}
