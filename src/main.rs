use prompter::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
    prompt::Interactivity,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new().filter_level(get_log_level_from_verbose(args.verbose)).init();

    // Environment and terminal state are read once, here.
    let interactivity = Interactivity::detect();

    match run(args, interactivity) {
        Ok(answer) => println!("{answer}"),
        Err(err) => default_error_handler(err),
    }
}
