//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;
use lensbox::typeclass::Maybe;

use crate::domain::Person;
use crate::edit::EditPlan;
use crate::error::ContactsError;

/// Edit a contact record through lenses and print it as JSON.
///
/// Logging is controlled with `RUST_LOG` (default `contacts=info`).
#[derive(Debug, Parser)]
#[command(name = "contacts")]
#[command(about = "Edit a contact record through lenses")]
pub struct Cli {
    /// JSON file holding the record to edit; a built-in sample is used when omitted
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New street
    #[arg(long)]
    pub street: Option<String>,

    /// New city
    #[arg(long)]
    pub city: Option<String>,

    /// Also halve this number twice and print the result
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub halve: Option<i64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// The field changes requested on the command line.
    #[must_use]
    pub fn edit_plan(&self) -> EditPlan {
        EditPlan {
            name: Maybe::from(self.name.clone()),
            street: Maybe::from(self.street.clone()),
            city: Maybe::from(self.city.clone()),
        }
    }

    /// Loads the record named by `--record`, or the sample record.
    ///
    /// # Errors
    ///
    /// Propagates read and parse failures from [`Person::load`].
    pub fn load_record(&self) -> Result<Person, ContactsError> {
        self.record
            .as_deref()
            .map_or_else(|| Ok(Person::sample()), Person::load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(arguments: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("contacts").chain(arguments.iter().copied()))
            .unwrap()
    }

    #[rstest]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(cli.record.is_none());
        assert!(!cli.pretty);
        assert!(cli.edit_plan().is_noop());
        assert_eq!(cli.load_record().unwrap(), Person::sample());
    }

    #[rstest]
    fn test_edit_flags_become_plan() {
        let cli = parse(&["--name", "mini Me", "--city", "LA"]);
        let plan = cli.edit_plan();

        assert_eq!(plan.name, Maybe::value("mini Me".to_string()));
        assert_eq!(plan.street, Maybe::empty());
        assert_eq!(plan.city, Maybe::value("LA".to_string()));
    }

    #[rstest]
    #[case(&["--halve", "20"], Some(20))]
    #[case(&["--halve", "-8"], Some(-8))]
    #[case(&["--pretty"], None)]
    fn test_halve_flag(#[case] arguments: &[&str], #[case] expected: Option<i64>) {
        assert_eq!(parse(arguments).halve, expected);
    }

    #[rstest]
    fn test_rejects_non_numeric_halve() {
        let result = Cli::try_parse_from(["contacts", "--halve", "twelve"]);
        assert!(result.is_err());
    }
}
