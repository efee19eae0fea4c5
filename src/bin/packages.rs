use std::io;
use std::process::ExitCode;

use dotenv::dotenv;

use ride_packages::cli;
use ride_packages::util::log;

fn main() -> ExitCode {
    // A missing .env file is fine, RUST_LOG may come from the environment.
    dotenv().ok();
    log::init();

    let status = cli::run(
        std::env::args().skip(1),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );

    ExitCode::from(status)
}
