use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const TUMBLE_AUTHOR: &str = crate_authors!();
const TUMBLE_VERSION: &str = crate_version!();
const TUMBLE_ABOUT: &str = crate_description!();
const TUMBLE_ARG_DICE_HELP: &str = "The dice to roll";
const TUMBLE_ARG_DICE_LONG_HELP: &str = "The dice to roll\n\n\
    Usage: <COUNT>d<SIDES>[<OPERATION><OPERAND>]\n\n\
    COUNT, SIDES: positive integer\n\n\
    OPERATION: + (add), - (subtract), .+ (add to every dice), .- (subtract from every dice)\n\n\
    OPERAND: positive integer";
const TUMBLE_FLAG_MAX_HELP: &str = "Use the maximum value rolled";
const TUMBLE_FLAG_MIN_HELP: &str = "Use the minimum value rolled";
const TUMBLE_FLAG_D_SHORT: char = 'd';
const TUMBLE_FLAG_D_HELP: &str = "Enable Debug logging";

#[derive(Parser, Debug)]
#[command(author = TUMBLE_AUTHOR, version = TUMBLE_VERSION, about = TUMBLE_ABOUT)]
pub struct Args {
    #[arg(help = TUMBLE_ARG_DICE_HELP, long_help = TUMBLE_ARG_DICE_LONG_HELP)]
    pub dice: String,
    #[arg(long, help = TUMBLE_FLAG_MAX_HELP, action)]
    pub max: bool,
    #[arg(long, help = TUMBLE_FLAG_MIN_HELP, action)]
    pub min: bool,
    #[arg(short = TUMBLE_FLAG_D_SHORT, long, help = TUMBLE_FLAG_D_HELP, action)]
    pub debug: bool,
}
