mod cli;
mod commands;

use cli::{CheckParams, DumpParams, GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            init_logging(m.get_count("verbose"));
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("dump", m)) => {
            init_logging(m.get_count("verbose"));
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("check", m)) => {
            init_logging(m.get_count("verbose"));
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `info` by default, `-v` for debug, `-vv` for trace. `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
