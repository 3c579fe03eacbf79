use log::info;
use ordered_trees::red_black_tree::RedBlackTree;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::error::Error;

const LOG_LEVEL_VAR: &str = "ORDERED_TREES_LOG";

enum Step {
    Insert(u32),
    Remove(u32),
}

const STEPS: [Step; 14] = [
    Step::Insert(10),
    Step::Insert(11),
    Step::Insert(9),
    Step::Remove(10),
    Step::Insert(13),
    Step::Insert(7),
    Step::Insert(5),
    Step::Remove(9),
    Step::Remove(11),
    Step::Insert(14),
    Step::Insert(15),
    Step::Insert(16),
    Step::Insert(17),
    Step::Insert(18),
];

fn initialize_logging() {
    let level = env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to install logger: {}", err);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging();

    let mut tree = RedBlackTree::new();
    for step in STEPS.iter() {
        match *step {
            Step::Insert(value) => {
                info!("inserting {}", value);
                tree.insert(value);
            },
            Step::Remove(value) => {
                info!("removing {}", value);
                tree.remove(&value)?;
            },
        }

        println!("{}", tree);
        println!("Is valid RBT: {}", if tree.is_valid() { "TRUE" } else { "FALSE" });
        println!();
    }

    info!("final size {}", tree.len());
    Ok(())
}
