//! Command dispatcher
//!
//! This module interprets the switch queue against the account store. Work
//! happens in two batches:
//!
//! 1. **Mutations**, visited in the fixed order of [`MUTATIONS`]: area code,
//!    first name, phone, last name, middle initial, SSN, transfer, password.
//! 2. **Queries**, visited in the order of [`QUERIES`]: display info, then
//!    write report.
//!
//! A command runs only if its switch was supplied, and each runs at most
//! once. Each command consumes the account credentials (`/N`, `/P`) it needs
//! with take-next, so credentials are matched to commands in priority order,
//! not in the order they were typed.
//!
//! # Carried-over account
//!
//! When a field update cannot resolve an account from credentials, it acts
//! on the account used by the previous mutation in the same pass. Display
//! info falls back to the last account of the mutation batch. The source of
//! a transfer never falls back.
//!
//! # Failure
//!
//! The first failure stops dispatch. Mutations already applied stay applied.

use crate::core::traits::Reporter;
use crate::core::validators;
use crate::core::{AccountStore, SwitchQueue};
use crate::types::{Account, FieldError, LedgerError, Name, Password, Switch};
use log::{debug, info};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Updates one account field from a single switch value
#[derive(Clone, Copy)]
pub struct FieldUpdate {
    /// Switch carrying the new value
    pub switch: Switch,
    /// Command name used in errors and logs
    pub name: &'static str,
    /// Syntax check for the raw value
    pub validate: fn(&str) -> bool,
    /// Store an already-validated value into the account
    ///
    /// Must not modify the account when it returns an error.
    pub apply: fn(&mut Account, &str) -> Result<(), FieldError>,
}

/// A mutating command
#[derive(Clone, Copy)]
pub enum Command {
    Update(FieldUpdate),
    Transfer,
}

impl Command {
    pub fn switch(&self) -> Switch {
        match self {
            Command::Update(update) => update.switch,
            Command::Transfer => Switch::Transfer,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Update(update) => update.name,
            Command::Transfer => "transfer",
        }
    }
}

/// A read-only command, run after every mutation has succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    DisplayInfo,
    WriteReport,
}

impl Query {
    pub fn switch(&self) -> Switch {
        match self {
            Query::DisplayInfo => Switch::Info,
            Query::WriteReport => Switch::Report,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Query::DisplayInfo => "display-info",
            Query::WriteReport => "write-report",
        }
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, FieldError> {
    value
        .parse()
        .map_err(|_| FieldError::malformed(field, value))
}

fn set_area_code(account: &mut Account, value: &str) -> Result<(), FieldError> {
    account.area = parse_number("area code", value)?;
    Ok(())
}

fn set_first_name(account: &mut Account, value: &str) -> Result<(), FieldError> {
    account.first = Name::new(value)?;
    Ok(())
}

fn set_phone(account: &mut Account, value: &str) -> Result<(), FieldError> {
    account.phone = parse_number("phone number", value)?;
    Ok(())
}

fn set_last_name(account: &mut Account, value: &str) -> Result<(), FieldError> {
    account.last = Name::new(value)?;
    Ok(())
}

fn set_middle_initial(account: &mut Account, value: &str) -> Result<(), FieldError> {
    account.middle = value
        .chars()
        .next()
        .ok_or_else(|| FieldError::malformed("middle initial", value))?;
    Ok(())
}

fn set_social_security(account: &mut Account, value: &str) -> Result<(), FieldError> {
    account.social = parse_number("social security number", value)?;
    Ok(())
}

fn set_password(account: &mut Account, value: &str) -> Result<(), FieldError> {
    account.password = Password::new(value)?;
    Ok(())
}

/// Mutating commands in priority order
pub const MUTATIONS: [Command; 8] = [
    Command::Update(FieldUpdate {
        switch: Switch::AreaCode,
        name: "change-area-code",
        validate: validators::is_area_code,
        apply: set_area_code,
    }),
    Command::Update(FieldUpdate {
        switch: Switch::FirstName,
        name: "change-first-name",
        validate: validators::is_name,
        apply: set_first_name,
    }),
    Command::Update(FieldUpdate {
        switch: Switch::Phone,
        name: "change-phone",
        validate: validators::is_phone,
        apply: set_phone,
    }),
    Command::Update(FieldUpdate {
        switch: Switch::LastName,
        name: "change-last-name",
        validate: validators::is_name,
        apply: set_last_name,
    }),
    Command::Update(FieldUpdate {
        switch: Switch::MiddleInitial,
        name: "change-middle-initial",
        validate: validators::is_middle_initial,
        apply: set_middle_initial,
    }),
    Command::Update(FieldUpdate {
        switch: Switch::SocialSecurity,
        name: "change-social-security-number",
        validate: validators::is_social_security,
        apply: set_social_security,
    }),
    Command::Transfer,
    Command::Update(FieldUpdate {
        switch: Switch::NewPassword,
        name: "change-password",
        validate: validators::is_password,
        apply: set_password,
    }),
];

/// Query commands in execution order
pub const QUERIES: [Query; 2] = [Query::DisplayInfo, Query::WriteReport];

/// Applies one invocation's switches to an account store
pub struct Dispatcher<'a, R: Reporter> {
    store: &'a mut AccountStore,
    reporter: &'a mut R,
}

impl<'a, R: Reporter> Dispatcher<'a, R> {
    pub fn new(store: &'a mut AccountStore, reporter: &'a mut R) -> Self {
        Dispatcher { store, reporter }
    }

    /// Run both batches, stopping at the first failure
    pub fn run(&mut self, switches: &mut SwitchQueue) -> Result<(), LedgerError> {
        let carried = self.run_mutations(switches)?;
        self.run_queries(switches, carried)
    }

    /// Run the mutation batch, returning the last acting account
    pub fn run_mutations(
        &mut self,
        switches: &mut SwitchQueue,
    ) -> Result<Option<usize>, LedgerError> {
        let mut carried = None;

        for command in MUTATIONS {
            if !switches.contains(command.switch()) {
                continue;
            }
            debug!("Dispatching {}", command.name());

            let acting = match command {
                Command::Update(update) => self.update(update, switches, carried)?,
                Command::Transfer => self.transfer(switches)?,
            };
            carried = Some(acting);
        }

        Ok(carried)
    }

    /// Run the query batch
    ///
    /// `carried` is the account the mutation batch ended on, if any.
    pub fn run_queries(
        &mut self,
        switches: &mut SwitchQueue,
        carried: Option<usize>,
    ) -> Result<(), LedgerError> {
        for query in QUERIES {
            if !switches.contains(query.switch()) {
                continue;
            }
            debug!("Dispatching {}", query.name());

            match query {
                Query::DisplayInfo => {
                    // The info switch carries no meaningful value
                    switches.take_next(Switch::Info);
                    let account = self
                        .resolve(switches)
                        .or(carried)
                        .and_then(|index| self.store.get(index))
                        .ok_or_else(|| LedgerError::account_required(query.name()))?;
                    self.reporter.display_info(account);
                }
                Query::WriteReport => {
                    let destination = switches.take_next(Switch::Report);
                    self.reporter
                        .write_report(self.store.accounts(), destination.as_deref())?;
                    info!(
                        "Wrote report of {} accounts to {}",
                        self.store.len(),
                        destination.as_deref().unwrap_or_default()
                    );
                }
            }
        }

        Ok(())
    }

    /// Consume one account-number and one password value and look them up
    fn resolve(&self, switches: &mut SwitchQueue) -> Option<usize> {
        let number = switches.take_next(Switch::AccountNumber);
        let password = switches.take_next(Switch::AccountPassword);
        self.store.position(number.as_deref(), password.as_deref())
    }

    fn update(
        &mut self,
        update: FieldUpdate,
        switches: &mut SwitchQueue,
        carried: Option<usize>,
    ) -> Result<usize, LedgerError> {
        let index = self
            .resolve(switches)
            .or(carried)
            .ok_or_else(|| LedgerError::account_required(update.name))?;

        let value = switches
            .take_next(update.switch)
            .filter(|value| (update.validate)(value.as_str()))
            .ok_or_else(|| LedgerError::information_required(update.name))?;

        let account = self
            .store
            .get_mut(index)
            .ok_or_else(|| LedgerError::account_required(update.name))?;

        (update.apply)(account, &value).map_err(|e| {
            debug!("{} rejected value: {}", update.name, e);
            LedgerError::information_required(update.name)
        })?;

        info!("{} applied to account {}", update.name, account.number);
        Ok(index)
    }

    fn transfer(&mut self, switches: &mut SwitchQueue) -> Result<usize, LedgerError> {
        let name = Command::Transfer.name();

        let source = self
            .resolve(switches)
            .ok_or_else(|| LedgerError::account_required(name))?;

        let destination = self
            .resolve(switches)
            .ok_or(LedgerError::TransferDestinationRequired)?;

        let value = switches
            .take_next(Switch::Transfer)
            .filter(|value| validators::is_transfer_amount(value))
            .ok_or_else(|| LedgerError::information_required(name))?;

        let amount = match Decimal::from_str(&value) {
            Ok(amount) => amount,
            // Too many digits for a Decimal, so larger than any balance
            Err(_) => {
                let account = &self.store.accounts()[source];
                return Err(LedgerError::transfer_exceeds_balance(
                    &account.number,
                    account.balance,
                    Decimal::MAX,
                ));
            }
        };

        self.store.transfer(source, destination, amount)?;

        info!(
            "Transferred {} from account {} to account {}",
            amount,
            self.store.accounts()[source].number,
            self.store.accounts()[destination].number
        );
        Ok(source)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::account_store::tests::account;
    use rstest::rstest;

    /// Reporter that records what it was asked to show
    #[derive(Debug, Default)]
    pub(crate) struct RecordingReporter {
        pub help_shown: usize,
        pub displayed: Vec<String>,
        pub reports: Vec<(Option<String>, usize)>,
        pub fail_reports: bool,
    }

    impl Reporter for RecordingReporter {
        fn display_help(&mut self) {
            self.help_shown += 1;
        }

        fn display_info(&mut self, account: &Account) {
            self.displayed.push(account.number.to_string());
        }

        fn write_report(
            &mut self,
            accounts: &[Account],
            destination: Option<&str>,
        ) -> Result<(), LedgerError> {
            if self.fail_reports || destination.is_none() {
                return Err(LedgerError::report_file_error(destination, "unwritable"));
            }
            self.reports
                .push((destination.map(str::to_string), accounts.len()));
            Ok(())
        }
    }

    fn store() -> AccountStore {
        let mut store = AccountStore::load(vec![
            account("A0002", "SECRT2", Decimal::new(5000, 2)),
            account("A0001", "SECRT1", Decimal::new(10000, 2)),
        ]);
        store.sort_by_number();
        store
    }

    fn run(
        store: &mut AccountStore,
        reporter: &mut RecordingReporter,
        switches: &[(char, &str)],
    ) -> Result<(), LedgerError> {
        let mut queue: SwitchQueue = switches.iter().copied().collect();
        Dispatcher::new(store, reporter).run(&mut queue)
    }

    fn by_number<'s>(store: &'s AccountStore, number: &str) -> &'s Account {
        store
            .accounts()
            .iter()
            .find(|a| a.number.as_str() == number)
            .unwrap()
    }

    #[test]
    fn test_transfer_within_balance() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        run(
            &mut store,
            &mut reporter,
            &[
                ('N', "A0001"),
                ('P', "SECRT1"),
                ('N', "A0002"),
                ('P', "SECRT2"),
                ('T', "30"),
            ],
        )
        .unwrap();

        assert_eq!(by_number(&store, "A0001").balance, Decimal::new(7000, 2));
        assert_eq!(by_number(&store, "A0002").balance, Decimal::new(8000, 2));
        assert_eq!(store.total_balance(), Decimal::new(15000, 2));
    }

    #[test]
    fn test_transfer_exceeding_balance_is_rejected() {
        let mut store = store();
        let snapshot = store.clone();
        let mut reporter = RecordingReporter::default();

        let result = run(
            &mut store,
            &mut reporter,
            &[
                ('N', "A0001"),
                ('P', "SECRT1"),
                ('N', "A0002"),
                ('P', "SECRT2"),
                ('T', "200"),
            ],
        );

        assert_eq!(result.unwrap_err().exit_code(), 7);
        assert_eq!(store, snapshot);
    }

    #[rstest]
    #[case::no_credentials(&[('T', "30")], 3)]
    #[case::bad_source(&[('N', "A0001"), ('P', "WRONG1"), ('N', "A0002"), ('P', "SECRT2"), ('T', "30")], 3)]
    #[case::no_destination(&[('N', "A0001"), ('P', "SECRT1"), ('T', "30")], 6)]
    #[case::bad_destination(&[('N', "A0001"), ('P', "SECRT1"), ('N', "A0002"), ('P', "SECRT1"), ('T', "30")], 6)]
    #[case::fractional_amount(&[('N', "A0001"), ('P', "SECRT1"), ('N', "A0002"), ('P', "SECRT2"), ('T', "30.50")], 4)]
    #[case::negative_amount(&[('N', "A0001"), ('P', "SECRT1"), ('N', "A0002"), ('P', "SECRT2"), ('T', "-30")], 4)]
    #[case::huge_amount(
        &[('N', "A0001"), ('P', "SECRT1"), ('N', "A0002"), ('P', "SECRT2"), ('T', "9999999999999999999999999999999999999999")],
        7
    )]
    fn test_transfer_failures(#[case] switches: &[(char, &str)], #[case] code: i32) {
        let mut store = store();
        let snapshot = store.clone();
        let mut reporter = RecordingReporter::default();

        let result = run(&mut store, &mut reporter, switches);

        assert_eq!(result.unwrap_err().exit_code(), code);
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_transfer_amount_with_leading_zeros() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();
        let amount = format!("{}30", "0".repeat(60));

        run(
            &mut store,
            &mut reporter,
            &[
                ('N', "A0001"),
                ('P', "SECRT1"),
                ('N', "A0002"),
                ('P', "SECRT2"),
                ('T', amount.as_str()),
            ],
        )
        .unwrap();

        assert_eq!(by_number(&store, "A0001").balance, Decimal::new(7000, 2));
    }

    #[test]
    fn test_transfer_source_ignores_carried_account() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        let result = run(
            &mut store,
            &mut reporter,
            &[('N', "A0001"), ('P', "SECRT1"), ('A', "212"), ('T', "30")],
        );

        assert!(matches!(result, Err(LedgerError::AccountRequired { .. })));
        assert_eq!(by_number(&store, "A0001").area, 212);
    }

    #[rstest]
    #[case::six_digits("123456", Err(4))]
    #[case::seven_digits("1234567", Ok(1234567))]
    #[case::empty("", Err(4))]
    #[case::letters("555abcd", Err(4))]
    fn test_phone_change(#[case] value: &str, #[case] expected: Result<u32, i32>) {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        let result = run(
            &mut store,
            &mut reporter,
            &[('N', "A0001"), ('P', "SECRT1"), ('H', value)],
        );

        match expected {
            Ok(phone) => {
                assert!(result.is_ok());
                assert_eq!(by_number(&store, "A0001").phone, phone);
            }
            Err(code) => {
                assert_eq!(result.unwrap_err().exit_code(), code);
                assert_eq!(by_number(&store, "A0001").phone, 1234567);
            }
        }
    }

    #[test]
    fn test_every_field_update() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        run(
            &mut store,
            &mut reporter,
            &[
                ('N', "A0002"),
                ('P', "SECRT2"),
                ('A', "012"),
                ('F', "Alice"),
                ('H', "7654321"),
                ('L', "Jones"),
                ('M', "B"),
                ('S', "987654321"),
                ('W', "NEWPW9"),
            ],
        )
        .unwrap();

        let updated = by_number(&store, "A0002");
        assert_eq!(updated.area, 12);
        assert_eq!(updated.first.as_str(), "Alice");
        assert_eq!(updated.phone, 7654321);
        assert_eq!(updated.last.as_str(), "Jones");
        assert_eq!(updated.middle, 'B');
        assert_eq!(updated.social, 987654321);
        assert_eq!(updated.password.as_str(), "NEWPW9");

        // The other account is untouched
        assert_eq!(by_number(&store, "A0001").first.as_str(), "John");
    }

    #[test]
    fn test_carry_over_to_next_command() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        run(
            &mut store,
            &mut reporter,
            &[('N', "A0001"), ('P', "SECRT1"), ('A', "212"), ('H', "7654321")],
        )
        .unwrap();

        let updated = by_number(&store, "A0001");
        assert_eq!(updated.area, 212);
        assert_eq!(updated.phone, 7654321);
        assert_eq!(by_number(&store, "A0002").phone, 1234567);
    }

    #[test]
    fn test_carry_over_when_credentials_do_not_match() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        run(
            &mut store,
            &mut reporter,
            &[
                ('N', "A0001"),
                ('P', "SECRT1"),
                ('N', "A0002"),
                ('P', "BADPW1"),
                ('A', "212"),
                ('F', "Alice"),
            ],
        )
        .unwrap();

        assert_eq!(by_number(&store, "A0001").first.as_str(), "Alice");
        assert_eq!(by_number(&store, "A0002").first.as_str(), "John");
    }

    #[test]
    fn test_carry_over_from_transfer_source() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        run(
            &mut store,
            &mut reporter,
            &[
                ('N', "A0001"),
                ('P', "SECRT1"),
                ('N', "A0002"),
                ('P', "SECRT2"),
                ('T', "30"),
                ('W', "NEWPW1"),
            ],
        )
        .unwrap();

        assert_eq!(by_number(&store, "A0001").password.as_str(), "NEWPW1");
        assert_eq!(by_number(&store, "A0002").password.as_str(), "SECRT2");
    }

    #[test]
    fn test_priority_order_not_input_order() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        // First name is typed before area code, but area code has priority
        // and therefore takes the first credentials.
        run(
            &mut store,
            &mut reporter,
            &[
                ('F', "Alice"),
                ('A', "212"),
                ('N', "A0001"),
                ('P', "SECRT1"),
                ('N', "A0002"),
                ('P', "SECRT2"),
            ],
        )
        .unwrap();

        assert_eq!(by_number(&store, "A0001").area, 212);
        assert_eq!(by_number(&store, "A0001").first.as_str(), "John");
        assert_eq!(by_number(&store, "A0002").first.as_str(), "Alice");
        assert_eq!(by_number(&store, "A0002").area, 555);
    }

    #[test]
    fn test_each_switch_runs_once_per_pass() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        run(
            &mut store,
            &mut reporter,
            &[('N', "A0001"), ('P', "SECRT1"), ('F', "Alice"), ('F', "Beth")],
        )
        .unwrap();

        assert_eq!(by_number(&store, "A0001").first.as_str(), "Alice");
    }

    #[test]
    fn test_update_without_any_account() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        let result = run(&mut store, &mut reporter, &[('A', "212")]);

        assert_eq!(
            result,
            Err(LedgerError::account_required("change-area-code"))
        );
    }

    #[test]
    fn test_failure_keeps_earlier_mutations() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        let result = run(
            &mut store,
            &mut reporter,
            &[
                ('N', "A0001"),
                ('P', "SECRT1"),
                ('A', "212"),
                ('H', "123"),
                ('I', ""),
            ],
        );

        assert_eq!(result, Err(LedgerError::information_required("change-phone")));
        assert_eq!(by_number(&store, "A0001").area, 212);
        // Queries never run after a failed mutation
        assert!(reporter.displayed.is_empty());
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();
        let long = "A".repeat(51);

        let result = run(
            &mut store,
            &mut reporter,
            &[('N', "A0001"), ('P', "SECRT1"), ('L', long.as_str())],
        );

        assert_eq!(result.unwrap_err().exit_code(), 4);
        assert_eq!(by_number(&store, "A0001").last.as_str(), "Smith");
    }

    #[rstest]
    #[case::explicit(&[('I', ""), ('N', "A0002"), ('P', "SECRT2")], Ok("A0002"))]
    #[case::carried(&[('N', "A0001"), ('P', "SECRT1"), ('M', "Z"), ('I', "")], Ok("A0001"))]
    #[case::explicit_after_mutation(
        &[('N', "A0001"), ('P', "SECRT1"), ('M', "Z"), ('N', "A0002"), ('P', "SECRT2"), ('I', "")],
        Ok("A0002")
    )]
    #[case::no_account(&[('I', "")], Err(3))]
    fn test_display_info(#[case] switches: &[(char, &str)], #[case] expected: Result<&str, i32>) {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        let result = run(&mut store, &mut reporter, switches);

        match expected {
            Ok(number) => {
                assert!(result.is_ok());
                assert_eq!(reporter.displayed, vec![number.to_string()]);
            }
            Err(code) => {
                assert_eq!(result.unwrap_err().exit_code(), code);
                assert!(reporter.displayed.is_empty());
            }
        }
    }

    #[test]
    fn test_report_sees_mutated_store() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        run(
            &mut store,
            &mut reporter,
            &[('R', "report.txt"), ('N', "A0001"), ('P', "SECRT1"), ('I', "")],
        )
        .unwrap();

        assert_eq!(reporter.displayed, vec!["A0001".to_string()]);
        assert_eq!(reporter.reports, vec![(Some("report.txt".to_string()), 2)]);
    }

    #[test]
    fn test_report_failure() {
        let mut store = store();
        let mut reporter = RecordingReporter {
            fail_reports: true,
            ..Default::default()
        };

        let result = run(&mut store, &mut reporter, &[('R', "/nonexistent/report.txt")]);

        assert_eq!(result.unwrap_err().exit_code(), 5);
    }

    #[test]
    fn test_no_commands_is_success() {
        let mut store = store();
        let snapshot = store.clone();
        let mut reporter = RecordingReporter::default();

        run(&mut store, &mut reporter, &[('N', "A0001"), ('P', "SECRT1")]).unwrap();

        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_successful_updates_leave_fields_valid() {
        let mut store = store();
        let mut reporter = RecordingReporter::default();

        run(
            &mut store,
            &mut reporter,
            &[('N', "A0001"), ('P', "SECRT1"), ('A', "007"), ('S', "000000001")],
        )
        .unwrap();

        let updated = by_number(&store, "A0001");
        let area = format!("{:03}", updated.area);
        let social = format!("{:09}", updated.social);
        assert!(validators::is_area_code(&area));
        assert!(validators::is_social_security(&social));
        assert!(validators::is_password(&updated.password));
    }
}
