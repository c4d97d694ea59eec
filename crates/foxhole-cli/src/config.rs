//! Command-line flags and their resolution into a validated [`Params`].
//!
//! Flag shapes mirror the original solver's `getopt` string (`l`/`w`/`p`/`v`
//! set numeric board parameters, `c`/`g`/`t` pick the geometry, `4`/`6`/`8`
//! pick the hole connectivity); `clap`'s derive API replaces `getopt` itself.

use clap::{Parser, ValueEnum};

use foxhole_core::{Connection, Geometry, Params, RawParams};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeometryArg {
    Circle,
    Grid,
    Triangle,
}

impl From<GeometryArg> for Geometry {
    fn from(g: GeometryArg) -> Geometry {
        match g {
            GeometryArg::Circle => Geometry::Circle,
            GeometryArg::Grid => Geometry::Grid,
            GeometryArg::Triangle => Geometry::Triangle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConnectionArg {
    #[value(name = "4")]
    Rectangular,
    #[value(name = "6")]
    Hexagonal,
    #[value(name = "8")]
    Octagonal,
}

impl From<ConnectionArg> for Connection {
    fn from(c: ConnectionArg) -> Connection {
        match c {
            ConnectionArg::Rectangular => Connection::Rectangular,
            ConnectionArg::Hexagonal => Connection::Hexagonal,
            ConnectionArg::Octagonal => Connection::Octagonal,
        }
    }
}

/// See <https://github.com/alfille/foxholes> for the puzzle this solves.
#[derive(Debug, Parser)]
#[command(name = "foxhole", about = "Solve the foxhole puzzle", version)]
pub struct Cli {
    /// Board length (3 to 64).
    #[arg(short = 'l', long = "length", default_value_t = 5)]
    pub xlength: u32,

    /// Board width, ignored for a Triangle board.
    #[arg(short = 'w', long = "width", default_value_t = 1)]
    pub ylength: u32,

    /// Foxhole layout.
    #[arg(short = 'o', long = "geometry", value_enum, default_value_t = GeometryArg::Circle)]
    pub geometry: GeometryArg,

    /// How neighboring holes connect.
    #[arg(short = 'n', long = "connection", value_enum, default_value_t = ConnectionArg::Rectangular)]
    pub connection: ConnectionArg,

    /// Holes visited per day.
    #[arg(short = 'v', long = "visits", default_value_t = 1)]
    pub visits: u32,

    /// Days a visited hole stays poisoned (unreachable to a jumping fox).
    #[arg(short = 'p', long = "poison", default_value_t = 0)]
    pub poison: u32,

    /// Emit JSON instead of a human-readable summary.
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Write JSON to this file instead of stdout (implies `--json`).
    #[arg(long = "json-file", value_name = "PATH")]
    pub json_file: Option<String>,

    /// Print each Bisector probe's day limit and outcome as it runs.
    #[arg(short = 'u', long = "update")]
    pub update: bool,
}

impl Cli {
    pub fn resolve(&self) -> Result<Params, CliError> {
        let raw = RawParams {
            xlen: self.xlength,
            ylen: self.ylength,
            visits: self.visits,
            poison: self.poison,
            geometry: self.geometry.into(),
            connection: self.connection.into(),
        };
        Params::resolve(raw).map_err(CliError::from)
    }

    pub fn wants_json(&self) -> bool {
        self.json || self.json_file.is_some()
    }
}
