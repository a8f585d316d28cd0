use crate::core::SwitchQueue;
use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Manage bank accounts stored in a flat-text database
#[derive(Parser, Debug)]
#[command(name = "bankacct", version)]
#[command(
    about = "Manage bank accounts stored in a flat-text database",
    long_about = None,
    after_help = "Commands are given as /X<value> switches, e.g. bankacct /Dbank.db /NA0001 /PSECRT1 /H5551234. Use /? for the full list."
)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Command switches of the form /X<value>
    #[arg(
        value_name = "SWITCH",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Command switches, e.g. /Dbank.db /NA0001 /PSECRT1 /I"
    )]
    pub switches: Vec<String>,
}

impl CliArgs {
    /// Log level selected by the verbosity flag
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    /// Collect the switch tokens into a queue
    pub fn switch_queue(&self) -> SwitchQueue {
        tokenize(&self.switches)
    }
}

/// Split raw tokens into a switch queue
///
/// A token is a switch if it starts with `/` and has at least one character
/// after it. That character is the letter; the rest of the token, possibly
/// empty, is the value. Other tokens are ignored.
pub fn tokenize<S: AsRef<str>>(tokens: &[S]) -> SwitchQueue {
    tokens
        .iter()
        .filter_map(|token| {
            let mut chars = token.as_ref().strip_prefix('/')?.chars();
            let letter = chars.next()?;
            Some((letter, chars.as_str()))
        })
        .collect()
}
