//! Route patterns made of literal and `:name` segments.

use anyhow::{Context as _, Result, bail};
use percent_encoding::percent_decode_str;

use crate::params::RouteParams;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route such as `/` or `/posts/:slug`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Path segments, ignoring empty ones from doubled or trailing slashes.
fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

impl RoutePattern {
    /// # Errors
    /// Fails when the pattern does not start with `/`, a parameter has no
    /// name, or a parameter name is used twice.
    pub fn parse(pattern: &str) -> Result<Self> {
        if !pattern.starts_with('/') {
            bail!("route pattern must start with '/': {pattern:?}");
        }
        let mut segments = Vec::new();
        for segment in path_segments(pattern) {
            let Some(name) = segment.strip_prefix(':') else {
                segments.push(Segment::Literal(segment.to_owned()));
                continue;
            };
            if name.is_empty() {
                bail!("route pattern has an unnamed parameter: {pattern:?}");
            }
            if segments.contains(&Segment::Param(name.to_owned())) {
                bail!("route pattern repeats parameter {name:?}: {pattern:?}");
            }
            segments.push(Segment::Param(name.to_owned()));
        }
        Ok(Self {
            raw: pattern.to_owned(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a request path, returning the captured segments still
    /// percent-encoded.
    pub fn matches(&self, path: &str) -> Option<Vec<(String, String)>> {
        let mut captures = Vec::new();
        let mut segments = path_segments(path);
        for expected in &self.segments {
            let actual = segments.next()?;
            match expected {
                Segment::Literal(literal) => {
                    if literal != actual {
                        return None;
                    }
                }
                Segment::Param(name) => captures.push((name.clone(), actual.to_owned())),
            }
        }
        if segments.next().is_some() {
            return None;
        }
        Some(captures)
    }
}

/// Percent-decode captured segments into route params.
///
/// # Errors
/// Fails when a decoded segment is not valid UTF-8.
pub fn decode_params(captures: Vec<(String, String)>) -> Result<RouteParams> {
    captures
        .into_iter()
        .map(|(name, raw)| {
            let value = percent_decode_str(&raw)
                .decode_utf8()
                .with_context(|| format!("route parameter {name:?} is not valid UTF-8"))?;
            Ok((name, value.into_owned()))
        })
        .collect()
}
