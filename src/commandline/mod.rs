use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(about = "Builds, prints and partially evaluates an arithmetic expression")]
pub struct Options {
    /// The expression, for example "x + 2 * 3"
    pub expression: String,
    /// Log more detail; repeat for debug (-vv) and trace (-vvv) output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    /// The `stderrlog` verbosity: warnings by default, one level more per `-v`.
    pub fn log_verbosity(&self) -> usize {
        1 + usize::from(self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_is_positional() {
        let options = Options::try_parse_from(["shunt", "x + 1"]).unwrap();
        assert_eq!("x + 1", options.expression);
        assert_eq!(0, options.verbose);
        assert_eq!(1, options.log_verbosity());
    }

    #[test]
    fn verbosity_is_raised_per_flag() {
        let options = Options::try_parse_from(["shunt", "-v", "x + 1"]).unwrap();
        assert_eq!("x + 1", options.expression);
        assert_eq!(2, options.log_verbosity());

        let options = Options::try_parse_from(["shunt", "-vvv", "x"]).unwrap();
        assert_eq!(3, options.verbose);
        assert_eq!(4, options.log_verbosity());

        let options = Options::try_parse_from(["shunt", "--verbose", "--verbose", "x"]).unwrap();
        assert_eq!(3, options.log_verbosity());
    }

    #[test]
    fn expression_is_required() {
        assert!(Options::try_parse_from(["shunt"]).is_err());
    }
}
