use clap::Parser;
use codebundle::{
    response, BundleArgs, Cli, CodeBundle, Command, OutputFormatter, OutputMode,
    UserFriendlyError,
};
use std::io;
use std::process;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = Cli::parse();

    match cli.command {
        Command::Bundle(ref args) => run_bundle(&cli, args),
        Command::CreateRsp => run_create_rsp(),
    }
}

fn run_bundle(cli: &Cli, args: &BundleArgs) -> i32 {
    let output_mode = OutputMode::from(cli.output_format);

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            print_startup_error(&e, output_mode);
            return 1;
        }
    };

    let request = match args.to_request(&config) {
        Ok(request) => request,
        Err(e) => {
            print_startup_error(&e, output_mode);
            return 1;
        }
    };

    let app = CodeBundle::new(config, output_mode, cli.verbose, cli.quiet);

    match app.bundle(&request) {
        Ok(report) => {
            app.output_formatter().print_bundle_report(&report);
            0
        }
        Err(e) => {
            app.handle_error(&e);
            // The user-error paths (existing output, empty selection,
            // invalid output directory) terminate normally.
            if e.is_soft() {
                0
            } else {
                1
            }
        }
    }
}

fn run_create_rsp() -> i32 {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match response::create_response_file(&mut input, &mut output) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Failed to create response file: {}", e.user_message());
            1
        }
    }
}

fn print_startup_error(error: &codebundle::BundleError, mode: OutputMode) {
    let formatter = OutputFormatter::new(mode, 0, false);
    formatter.print_user_friendly_error(error);
}
