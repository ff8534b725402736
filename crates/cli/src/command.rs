//! Line-oriented command parsing.
//!
//! Each control on the original surface gets one typed command; everything
//! else (help, facet listing, quitting) is a meta command handled by the
//! loop itself.

use armory_browse::{ControlEvent, SortKey};
use armory_core::{DomainError, DomainResult, ItemSlug};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forwarded to the session as-is.
    Control(ControlEvent),
    /// Print the available caliber/type facet values.
    Facets,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Empty lines parse to `Help`.
    pub fn parse(line: &str) -> DomainResult<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" | "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "facets" => Ok(Command::Facets),
            "query" => Ok(Command::Control(ControlEvent::QueryChanged(
                rest.to_string(),
            ))),
            "caliber" => {
                require_arg(verb, rest)?;
                Ok(Command::Control(ControlEvent::CaliberToggled(
                    rest.to_string(),
                )))
            }
            "type" => {
                require_arg(verb, rest)?;
                Ok(Command::Control(ControlEvent::TypeToggled(rest.to_string())))
            }
            "optics" => Ok(Command::Control(ControlEvent::OpticsOnlyChanged(
                parse_switch(rest)?,
            ))),
            "comped" => Ok(Command::Control(ControlEvent::CompedOnlyChanged(
                parse_switch(rest)?,
            ))),
            "price" => {
                require_arg(verb, rest)?;
                let value: u64 = rest
                    .parse()
                    .map_err(|_| DomainError::validation(format!("price: not a number: {rest}")))?;
                Ok(Command::Control(ControlEvent::MaxPriceChanged(value)))
            }
            "sort" => {
                require_arg(verb, rest)?;
                let key: SortKey = rest.parse()?;
                Ok(Command::Control(ControlEvent::ColumnClicked(key)))
            }
            "select" => {
                require_arg(verb, rest)?;
                let id: ItemSlug = rest.parse()?;
                Ok(Command::Control(ControlEvent::CompareToggled(id)))
            }
            "clear" => Ok(Command::Control(ControlEvent::CompareCleared)),
            other => Err(DomainError::validation(format!("unknown command: {other}"))),
        }
    }
}

fn require_arg(verb: &str, rest: &str) -> DomainResult<()> {
    if rest.is_empty() {
        return Err(DomainError::validation(format!("{verb}: missing argument")));
    }
    Ok(())
}

fn parse_switch(rest: &str) -> DomainResult<bool> {
    match rest.to_ascii_lowercase().as_str() {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => Err(DomainError::validation(format!(
            "expected on/off, got: {other}"
        ))),
    }
}

/// Usage text for `help` and for parse failures.
pub const USAGE: &str = "\
commands:
  query [text]       filter by brand/model substring (no text clears it)
  caliber <value>    toggle a caliber facet chip
  type <value>       toggle a type facet chip
  optics on|off      only optics-ready items
  comped on|off      only compensated items
  price <n>          max price (0 = no limit; snapped to steps of 50)
  sort <column>      click a column header (repeat to flip direction)
  select <id>        toggle an item in the comparison drawer (max 4)
  clear              empty the comparison drawer
  facets             list available caliber and type values
  help               show this text
  quit               leave";
