//! Miette diagnostics for command-line errors.

use std::fmt::Display;

use miette::Diagnostic;
use thiserror::Error;

use crate::error::Error;

/// A crate error annotated with a diagnostic code and an operator hint.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    pub message: String,
    pub code: &'static str,
    pub help: Option<String>,
}

impl Diagnostic for CliError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn Display + 'a>)
    }
}

impl From<Error> for CliError {
    fn from(err: Error) -> Self {
        let (code, help) = match &err {
            Error::Config(_) => (
                "ticketfinder::config",
                Some("check the TOML file passed with --config and the override flags"),
            ),
            Error::Http(_) | Error::Url(_) => (
                "ticketfinder::upstream",
                Some("check network access and the [sources.seatgeek] api_url"),
            ),
            Error::Server(_) | Error::Io(_) => (
                "ticketfinder::server",
                Some("make sure the bind address is free, or pass --bind"),
            ),
            Error::Listing(_) | Error::Json(_) => ("ticketfinder::data", None),
        };

        Self {
            message: err.to_string(),
            code,
            help: help.map(str::to_string),
        }
    }
}
