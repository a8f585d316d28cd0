//! Command-line switch letters
//!
//! Every switch is written as `/X<value>` on the command line, where `X` is
//! one of the letters below. Letters are case-sensitive.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    Help,
    Database,

    AreaCode,
    FirstName,
    Phone,
    LastName,
    MiddleInitial,
    SocialSecurity,
    Transfer,
    NewPassword,

    Info,
    Report,

    AccountNumber,
    AccountPassword,
}

impl Switch {
    /// Every known switch, in help-menu order
    pub const ALL: [Switch; 14] = [
        Switch::Help,
        Switch::Database,
        Switch::AreaCode,
        Switch::FirstName,
        Switch::Phone,
        Switch::LastName,
        Switch::MiddleInitial,
        Switch::SocialSecurity,
        Switch::Transfer,
        Switch::NewPassword,
        Switch::Info,
        Switch::Report,
        Switch::AccountNumber,
        Switch::AccountPassword,
    ];

    /// The letter that selects this switch
    pub const fn letter(self) -> char {
        match self {
            Switch::Help => '?',
            Switch::Database => 'D',
            Switch::AreaCode => 'A',
            Switch::FirstName => 'F',
            Switch::Phone => 'H',
            Switch::LastName => 'L',
            Switch::MiddleInitial => 'M',
            Switch::SocialSecurity => 'S',
            Switch::Transfer => 'T',
            Switch::NewPassword => 'W',
            Switch::Info => 'I',
            Switch::Report => 'R',
            Switch::AccountNumber => 'N',
            Switch::AccountPassword => 'P',
        }
    }

    /// One-line description used by the help menu
    pub const fn description(self) -> &'static str {
        match self {
            Switch::Help => "Display help menu",
            Switch::Database => "Specifies the database file to load and save",
            Switch::AreaCode => "Change the area code for a specified account",
            Switch::FirstName => "Change the first name for a specified account",
            Switch::Phone => "Change the phone number for a specified account",
            Switch::LastName => "Change the last name for a specified account",
            Switch::MiddleInitial => "Change the middle initial for a specified account",
            Switch::SocialSecurity => {
                "Change the social security number for a specified account"
            }
            Switch::Transfer => "Transfer money from one specified account to another",
            Switch::NewPassword => "Change the password for a specified account",
            Switch::Info => "Display all information about a specified account",
            Switch::Report => "Print a report to a specified report file",
            Switch::AccountNumber => "Specifies the account number for an action option",
            Switch::AccountPassword => "Specifies the password for an action option",
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.letter())
    }
}
