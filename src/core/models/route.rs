use std::fmt;
use std::str::FromStr;

use crate::core::errors::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    pub origin: i32,
    pub destination: i32,
}

impl Route {
    pub fn new(origin: i32, destination: i32) -> Self {
        Self { origin, destination }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

/// Parses user input of the form `<origin>-<destination>`, e.g. `1-2` or
/// `-1--2`. Surrounding whitespace is ignored, and so is whitespace around
/// either number.
impl FromStr for Route {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || ParseError::InvalidRoute(trimmed.to_string());

        // The separator is the first '-' after the origin's optional sign
        let sign_len = trimmed.chars().next().map_or(0, char::len_utf8);
        let separator = trimmed[sign_len..].find('-').map(|index| index + sign_len).ok_or_else(invalid)?;
        let (origin, destination) = (&trimmed[..separator], &trimmed[separator + 1..]);

        let origin = origin.trim().parse::<i32>().map_err(|_| invalid())?;
        let destination = destination.trim().parse::<i32>().map_err(|_| invalid())?;

        Ok(Self::new(origin, destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_route() {
        assert_eq!("1-2".parse::<Route>().unwrap(), Route::new(1, 2));
        assert_eq!("  10 - 20 \n".parse::<Route>().unwrap(), Route::new(10, 20));
    }

    #[test]
    fn test_parse_invalid_routes() {
        for input in ["", "1", "1-", "-2", "a-b", "1-2-3", "1_2", "1.5-2"] {
            let result = input.parse::<Route>();
            assert!(result.is_err(), "expected {:?} to be rejected", input);
        }
    }

    #[test]
    fn test_parse_negative_identifiers() {
        assert_eq!("-1-2".parse::<Route>().unwrap(), Route::new(-1, 2));
        assert_eq!("3--4".parse::<Route>().unwrap(), Route::new(3, -4));
        assert_eq!(" -5 - -6 ".parse::<Route>().unwrap(), Route::new(-5, -6));
        assert_eq!(Route::new(-1, -2).to_string().parse::<Route>().unwrap(), Route::new(-1, -2));
        assert!("--2".parse::<Route>().is_err());
        assert!("é-2".parse::<Route>().is_err());
    }

    #[test]
    fn test_parse_error_names_input() {
        let err = " x-1 ".parse::<Route>().unwrap_err();
        assert_eq!(err, ParseError::InvalidRoute("x-1".to_string()));
    }

    #[test]
    fn test_display_round_trips() {
        let route = Route::new(3, 7);
        assert_eq!(route.to_string(), "3-7");
        assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
    }
}
