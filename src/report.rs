//! Rendering of finished searches for people and for other programs.

use std::fmt::{self, Display};

use serde::Serialize;

use crate::algorithm::ShortestPathResult;
use crate::graph::Weight;
use crate::Result;

/// Plain-text rendering, one line per vertex
pub struct TextReport<'a, W>(pub &'a ShortestPathResult<W>);

impl<W: Weight + Display> Display for TextReport<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shortest distances from vertex {}:", self.0.source)?;
        for (vertex, distance) in self.0.distances.iter().enumerate() {
            match distance {
                Some(d) => writeln!(f, "To vertex {}: {}", vertex, d)?,
                None => writeln!(f, "To vertex {}: unreachable", vertex)?,
            }
        }
        Ok(())
    }
}

pub fn format_text<W: Weight + Display>(result: &ShortestPathResult<W>) -> String {
    TextReport(result).to_string()
}

/// JSON rendering: `{"source": s, "distances": [..]}` with `null` for
/// unreachable vertices
pub fn format_json<W: Weight + Serialize>(result: &ShortestPathResult<W>) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
