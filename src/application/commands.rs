//! Text commands for driving a session from a line-based stream.
//!
//! ```text
//! plan 3            plan pro2
//! users 2           users 4 annual
//! period quarterly
//! currency Pound (£)
//! phone 275
//! placeholder is-2
//! refresh
//! ```

use std::str::FromStr;

use crate::domain::catalog::BillingPeriod;
use crate::domain::foundation::ValidationError;

use super::{PlaceholderHint, PricingSignal};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Signal(PricingSignal),
    PhoneCredits(i64),
    Placeholder(PlaceholderHint),
}

impl FromStr for SessionCommand {
    type Err = ValidationError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(v, r)| (v, r.trim()))
            .unwrap_or((line, ""));

        let command = match verb.to_lowercase().as_str() {
            "plan" => match rest.parse::<i64>() {
                Ok(position) => SessionCommand::Signal(PricingSignal::SliderMoved { position }),
                Err(_) => SessionCommand::Signal(PricingSignal::PlanChosen {
                    code: required(rest, "plan")?.to_string(),
                }),
            },
            "users" => {
                let mut parts = rest.split_whitespace();
                let value = parse_number(parts.next().unwrap_or(""), "users")?;
                let period = parts
                    .next()
                    .map(|p| p.parse::<BillingPeriod>())
                    .transpose()?;
                SessionCommand::Signal(PricingSignal::UsersSelected { value, period })
            }
            "period" => SessionCommand::Signal(PricingSignal::PeriodSelected {
                period: required(rest, "period")?.to_string(),
            }),
            "currency" => SessionCommand::Signal(PricingSignal::CurrencySelected {
                label: required(rest, "currency")?.to_string(),
            }),
            "phone" => SessionCommand::PhoneCredits(parse_number(rest, "phone")?),
            "placeholder" => {
                let hint = match rest.parse::<usize>() {
                    Ok(index) => PlaceholderHint::at_index(index),
                    Err(_) => PlaceholderHint::from_classes(rest, 0),
                };
                SessionCommand::Placeholder(hint)
            }
            "refresh" => SessionCommand::Signal(PricingSignal::Refresh),
            _ => {
                return Err(ValidationError::invalid_format(
                    "command",
                    format!("unknown command '{}'", verb),
                ))
            }
        };
        Ok(command)
    }
}

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}

fn parse_number(value: &str, field: &str) -> Result<i64, ValidationError> {
    required(value, field)?
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_format(field, format!("'{}' is not a number", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        line.parse().unwrap()
    }

    #[test]
    fn plan_accepts_position_or_code() {
        assert_eq!(
            parse("plan 4"),
            SessionCommand::Signal(PricingSignal::SliderMoved { position: 4 })
        );
        assert_eq!(
            parse("plan pro2"),
            SessionCommand::Signal(PricingSignal::PlanChosen {
                code: "pro2".to_string()
            })
        );
    }

    #[test]
    fn users_with_optional_period() {
        assert_eq!(
            parse("users 2"),
            SessionCommand::Signal(PricingSignal::UsersSelected {
                value: 2,
                period: None
            })
        );
        assert_eq!(
            parse("  USERS 4 annual "),
            SessionCommand::Signal(PricingSignal::UsersSelected {
                value: 4,
                period: Some(BillingPeriod::Annual)
            })
        );
    }

    #[test]
    fn currency_keeps_full_label() {
        assert_eq!(
            parse("currency Pound (£)"),
            SessionCommand::Signal(PricingSignal::CurrencySelected {
                label: "Pound (£)".to_string()
            })
        );
    }

    #[test]
    fn phone_and_placeholder() {
        assert_eq!(parse("phone 275"), SessionCommand::PhoneCredits(275));
        assert_eq!(
            parse("placeholder is-3"),
            SessionCommand::Placeholder(PlaceholderHint::from_classes("is-3", 0))
        );
        assert_eq!(
            parse("placeholder 1"),
            SessionCommand::Placeholder(PlaceholderHint::at_index(1))
        );
    }

    #[test]
    fn period_value_is_passed_through_unvalidated() {
        assert_eq!(
            parse("period weekly"),
            SessionCommand::Signal(PricingSignal::PeriodSelected {
                period: "weekly".to_string()
            })
        );
    }

    #[test]
    fn malformed_lines_are_errors() {
        assert!("".parse::<SessionCommand>().is_err());
        assert!("users".parse::<SessionCommand>().is_err());
        assert!("users two".parse::<SessionCommand>().is_err());
        assert!("users 2 weekly".parse::<SessionCommand>().is_err());
        assert!("currency".parse::<SessionCommand>().is_err());
        assert!("jump 3".parse::<SessionCommand>().is_err());
    }
}
