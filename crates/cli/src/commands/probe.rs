// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `slotwatch probe` - Capture and evaluate the page once, without side effects

use crate::output::{self, OutputFormat};
use crate::settings::{self, Overrides};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use sw_adapters::{PageSource, SnapshotSource, TracedSnapshotSource};
use sw_core::{Outcome, ProbeKind, Strategy};

#[derive(Args)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub overrides: Overrides,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct ProbeReport {
    target: String,
    outcome: Outcome,
    signal: Option<Strategy>,
    matched_terms: Vec<String>,
    excluded_by: Option<String>,
    action_candidates: usize,
    styled_candidates: usize,
    forms: usize,
    snippet: String,
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.outcome, self.target)?;
        match self.signal {
            Some(strategy) => writeln!(f, "  Signal:  {}", strategy)?,
            None => writeln!(f, "  Signal:  none")?,
        }
        if let Some(term) = &self.excluded_by {
            writeln!(f, "  Excluded by: {}", term)?;
        }
        writeln!(f, "  Matched: {}", self.matched_terms.join(", "))?;
        writeln!(
            f,
            "  Found {} actions, {} styled, {} forms",
            self.action_candidates, self.styled_candidates, self.forms
        )?;
        write!(f, "  Snippet: {}", self.snippet)
    }
}

pub async fn handle(config_path: Option<&Path>, args: ProbeArgs) -> Result<()> {
    let config = settings::resolve(config_path, &args.overrides)?;
    let source = TracedSnapshotSource::new(PageSource::new(
        &config.source,
        config.detector.snippet_chars,
    ));

    let captured = source.capture(&config.target_url).await;
    source.close().await;
    let snapshot = captured?;

    let detection = config
        .build_detector()
        .detect(&snapshot, &config.filter);

    let report = ProbeReport {
        target: config.target_url.clone(),
        outcome: Outcome::from_open(detection.is_open),
        signal: detection.signal,
        matched_terms: detection.matched_terms,
        excluded_by: detection.excluded_by,
        action_candidates: snapshot.probed(ProbeKind::Action).count(),
        styled_candidates: snapshot.probed(ProbeKind::Styled).count(),
        forms: snapshot.probed(ProbeKind::Form).count(),
        snippet: detection.snippet,
    };
    output::print(&report, args.format)
}
