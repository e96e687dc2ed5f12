//! SQL script rendering
//!
//! Renders a grid as a plain-text SQL script: a comment header describing
//! the parameters, one transaction wrapping an `INSERT` per node and per
//! street. Lines are written to the sink as they are computed.

use std::io::Write;

use log::debug;

use crate::Error;
use crate::grid::{GridConfig, GridElement};
use crate::model::{Street, StreetNode};

/// Writes the complete seed script for `config` into `out`.
///
/// The script is a deterministic function of the grid parameters; two runs
/// with the same configuration produce byte-identical output.
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
pub fn write_script<W: Write>(out: &mut W, config: &GridConfig) -> Result<(), Error> {
    write_header(out, config)?;
    writeln!(out, "BEGIN;")?;

    let mut nodes: u64 = 0;
    let mut streets: u64 = 0;
    for element in config.iter() {
        match element {
            GridElement::Node(node) => {
                write_node(out, &node)?;
                nodes += 1;
            }
            GridElement::Street(street) => {
                write_street(out, &street)?;
                streets += 1;
            }
        }
    }

    writeln!(out, "END;")?;
    debug!("emitted {nodes} street nodes and {streets} streets");
    Ok(())
}

fn write_header<W: Write>(out: &mut W, config: &GridConfig) -> Result<(), Error> {
    writeln!(out, "-- Automatically generated Manhattan-style city,")?;
    writeln!(
        out,
        "--\tstarting in (top-left corner): {},{}",
        config.origin.x(),
        config.origin.y()
    )?;
    writeln!(out, "-- number of blocks:")?;
    writeln!(out, "--\tin X-axis: {}", config.num_x)?;
    writeln!(out, "--\tin Y-axis: {}", config.num_y)?;
    writeln!(out, "-- distance between blocks:")?;
    writeln!(out, "--\tin X-axis: {}", config.dist_x)?;
    writeln!(out, "--\tin Y-axis: {}", config.dist_y)?;
    writeln!(out)?;
    writeln!(out, "-- Generated by citygrid")?;
    writeln!(out)?;
    Ok(())
}

fn write_node<W: Write>(out: &mut W, node: &StreetNode) -> Result<(), Error> {
    writeln!(
        out,
        "INSERT INTO streetnodes VALUES({},{},{});",
        node.id,
        node.geometry.x(),
        node.geometry.y()
    )?;
    Ok(())
}

fn write_street<W: Write>(out: &mut W, street: &Street) -> Result<(), Error> {
    writeln!(
        out,
        "INSERT INTO streets VALUES({},{},{});",
        street.id, street.from, street.to
    )?;
    Ok(())
}
