use crate::error::Result;
use crate::movie::Category;
use clap::Parser;
use std::ffi::OsString;

/// Fetch movie listings from TMDB and optionally save them as CSV
#[derive(Debug, Parser)]
#[command(name = "tmdb-movies", version)]
#[command(override_usage = "tmdb-movies --type <TYPE> [--save <FILENAME.csv>]")]
pub struct Args {
    /// Type of movies to fetch
    #[arg(short = 't', long = "type", value_enum)]
    pub category: Category,

    /// Save the results to a CSV file inside the output directory (filename only)
    #[arg(short, long, value_name = "FILENAME.csv")]
    pub save: Option<String>,
}

/// Parses arguments; help and version requests come back as `Error::Argument` too.
pub fn parse_args<I, T>(args: I) -> Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Args::try_parse_from(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::error::ErrorKind;

    #[test]
    fn long_and_short_flags() {
        let args = parse_args(["tmdb-movies", "--type", "top", "--save", "out.csv"]).unwrap();
        assert_eq!(args.category, Category::Top);
        assert_eq!(args.save.as_deref(), Some("out.csv"));

        let args = parse_args(["tmdb-movies", "-t", "upcoming"]).unwrap();
        assert_eq!(args.category, Category::Upcoming);
        assert!(args.save.is_none());
    }

    #[test]
    fn type_is_required() {
        let err = parse_args(["tmdb-movies"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Argument(ref e) if e.kind() == ErrorKind::MissingRequiredArgument
        ));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = parse_args(["tmdb-movies", "--type", "latest"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Argument(ref e) if e.kind() == ErrorKind::InvalidValue
        ));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse_args(["tmdb-movies", "-t", "top", "--bogus"]).unwrap_err();
        assert!(matches!(err, Error::Argument(ref e) if e.use_stderr()));
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = parse_args(["tmdb-movies", "-h"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Argument(ref e) if e.kind() == ErrorKind::DisplayHelp && !e.use_stderr()
        ));
    }
}
